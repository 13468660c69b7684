//! # PayRaise Calculator
//!
//! Salary and pay raise calculators served as a server-rendered marketing
//! site, with schema.org structured data on every page.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Calculators, content entities and SEO composers
//! - **Application Layer** ([`application`]) - Content lookup and sitemap assembly
//! - **Infrastructure Layer** ([`infrastructure`]) - Built-in content catalog
//! - **API Layer** ([`api`]) - JSON calculator API, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML pages and calculator forms
//!
//! ## Features
//!
//! - Raise, inflation, hourly, cost-of-living, promotion and total
//!   compensation calculators
//! - JSON-LD structured data, canonical URLs, Open Graph and Twitter cards
//! - Breadcrumb trails with `BreadcrumbList` schema
//! - `sitemap.xml` and `robots.txt`
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export SITE_URL="http://localhost:3000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ContentService;
    pub use crate::domain::calculators::{CalculatorError, CalculatorKind};
    pub use crate::domain::entities::{BreadcrumbSegment, PageMetadata, SiteIdentity};
    pub use crate::domain::seo::StructuredData;
    pub use crate::error::AppError;
    pub use crate::infrastructure::content::StaticContentRepository;
    pub use crate::state::AppState;
}
