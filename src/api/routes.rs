//! API route configuration.
//!
//! The calculator API is public and rate limited per client IP via
//! [`crate::api::middleware::rate_limit`].

use axum::{Router, routing::post};

use crate::api::handlers::{
    cost_of_living_handler, hourly_handler, inflation_handler, promotion_handler,
    raise_handler, raise_percentage_handler, salary_handler, total_compensation_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;

/// Calculator endpoints, without rate limiting.
///
/// # Endpoints
///
/// - `POST /raise`              - Apply a percentage raise
/// - `POST /raise-percentage`   - Raise percentage between two salaries
/// - `POST /inflation`          - Inflation-adjusted raise
/// - `POST /hourly`             - Hourly wage to every pay period
/// - `POST /salary`             - Annual salary to every pay period
/// - `POST /cost-of-living`     - Equivalent salary in another city
/// - `POST /promotion`          - Promotion raise bands
/// - `POST /total-compensation` - Total compensation summary
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/raise", post(raise_handler))
        .route("/raise-percentage", post(raise_percentage_handler))
        .route("/inflation", post(inflation_handler))
        .route("/hourly", post(hourly_handler))
        .route("/salary", post(salary_handler))
        .route("/cost-of-living", post(cost_of_living_handler))
        .route("/promotion", post(promotion_handler))
        .route("/total-compensation", post(total_compensation_handler))
}

/// Everything mounted under `/api`, rate limited.
pub fn api_routes(behind_proxy: bool) -> anyhow::Result<Router<AppState>> {
    Ok(Router::new()
        .nest("/calculators", calculator_routes())
        .layer(rate_limit::layer(behind_proxy)?))
}
