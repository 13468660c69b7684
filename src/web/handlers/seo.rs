//! `sitemap.xml` and `robots.txt`.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::domain::seo::{render_robots, render_sitemap};
use crate::error::AppError;
use crate::state::AppState;

/// Sitemap of every routable page.
///
/// `GET /sitemap.xml`
pub async fn sitemap_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = state.content_service.sitemap_entries().await?;
    tracing::debug!(entries = entries.len(), "Rendering sitemap");

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.site, &entries),
    ))
}

/// `GET /robots.txt`
pub async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.site),
    )
}
