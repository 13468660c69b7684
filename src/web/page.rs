//! Per-request page context and HTML error pages.

use std::convert::Infallible;
use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use crate::domain::entities::{BreadcrumbSegment, PageMetadata, SiteIdentity};
use crate::domain::seo::{BreadcrumbTrail, HeadModel, compose_breadcrumbs, compose_head};
use crate::error::AppError;
use crate::state::AppState;

/// Site identity plus the request path, extracted for every page handler.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site: Arc<SiteIdentity>,
    pub path: String,
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self {
            site: state.site.clone(),
            path: parts.uri.path().to_string(),
        })
    }
}

impl PageContext {
    pub fn head(&self, metadata: &PageMetadata) -> HeadModel {
        compose_head(&self.site, metadata, &self.path)
    }

    pub fn breadcrumbs(&self, segments: &[BreadcrumbSegment]) -> BreadcrumbTrail {
        compose_breadcrumbs(&self.site, segments)
    }

    /// Wraps a service error into an HTML error page for this request.
    pub fn error(&self, error: AppError) -> PageError {
        PageError {
            context: self.clone(),
            error,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub status: u16,
    pub heading: String,
    pub message: String,
}

/// Error returned by page handlers; renders the site's error page.
#[derive(Debug)]
pub struct PageError {
    context: PageContext,
    error: AppError,
}

impl PageError {
    pub fn not_found(context: PageContext) -> Self {
        let path = context.path.clone();
        Self {
            context,
            error: AppError::not_found("Page not found", serde_json::json!({ "path": path })),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let (heading, message) = if status == StatusCode::NOT_FOUND {
            (
                "Page not found",
                "The page you are looking for does not exist or has moved.",
            )
        } else {
            tracing::error!(path = %self.context.path, "Page failed: {}", self.error);
            (
                "Something went wrong",
                "We could not load this page. Please try again shortly.",
            )
        };

        let metadata = PageMetadata::new(heading, message).with_canonical_path("/");
        let mut head = self.context.head(&metadata);
        head.robots = "noindex";

        let template = ErrorTemplate {
            head,
            breadcrumbs: None,
            status: status.as_u16(),
            heading: heading.to_string(),
            message: message.to_string(),
        };

        (status, template).into_response()
    }
}

/// Fallback for unrouted paths.
pub async fn not_found_handler(context: PageContext) -> PageError {
    PageError::not_found(context)
}
