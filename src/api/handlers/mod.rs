//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod calculators;
pub mod health;

pub use calculators::{
    cost_of_living_handler, hourly_handler, inflation_handler, promotion_handler,
    raise_handler, raise_percentage_handler, salary_handler, total_compensation_handler,
};
pub use health::health_handler;
