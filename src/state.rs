//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ContentService;
use crate::domain::entities::SiteIdentity;
use crate::infrastructure::content::StaticContentRepository;

/// Cloned per request by axum; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteIdentity>,
    pub content_service: Arc<ContentService<StaticContentRepository>>,
}

impl AppState {
    pub fn new(site: SiteIdentity, repository: StaticContentRepository) -> Self {
        Self {
            site: Arc::new(site),
            content_service: Arc::new(ContentService::new(Arc::new(repository))),
        }
    }
}
