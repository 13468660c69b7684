//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/tools/*`, `/blog/*`, `/guides/*`, `/faq`, `/about` - Pages
//! - `GET  /sitemap.xml`, `/robots.txt` - SEO files
//! - `GET  /health`      - Health check (public)
//! - `/api/calculators/*` - JSON calculator API (rate limited)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::page::not_found_handler;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `static_dir` - directory served under `/static`
///
/// # Errors
///
/// Fails if the rate limiter cannot be configured.
pub fn app_router(state: AppState, behind_proxy: bool, static_dir: &str) -> Result<NormalizePath<Router>> {
    let router = site_router(state, api::routes::api_routes(behind_proxy)?, static_dir);
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Pages, health check, static files and the given API router, without
/// path normalization.
///
/// Integration tests pass [`api::routes::calculator_routes`] nested under
/// `/calculators` here, since the rate limiter needs the peer address.
pub fn site_router(state: AppState, api_router: Router<AppState>, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
