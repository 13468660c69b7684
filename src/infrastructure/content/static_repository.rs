//! Content repository backed by the inline catalog.

use async_trait::async_trait;
use tracing::debug;

use super::catalog;
use crate::domain::entities::{Article, Faq, Guide, Tool};
use crate::domain::repositories::ContentRepository;
use crate::error::AppError;

/// Serves the catalog compiled into the binary.
///
/// Content is loaded once at construction and cloned out on every read.
pub struct StaticContentRepository {
    articles: Vec<Article>,
    guides: Vec<Guide>,
    tools: Vec<Tool>,
    faqs: Vec<Faq>,
}

impl StaticContentRepository {
    pub fn new() -> Self {
        let repository = Self {
            articles: catalog::articles(),
            guides: catalog::guides(),
            tools: catalog::tools(),
            faqs: catalog::faqs(),
        };
        debug!(
            articles = repository.articles.len(),
            guides = repository.guides.len(),
            tools = repository.tools.len(),
            "Loaded static content catalog"
        );
        repository
    }
}

impl Default for StaticContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for StaticContentRepository {
    async fn articles(&self) -> Result<Vec<Article>, AppError> {
        Ok(self.articles.clone())
    }

    async fn find_article(&self, slug: &str) -> Result<Option<Article>, AppError> {
        Ok(self.articles.iter().find(|a| a.slug == slug).cloned())
    }

    async fn guides(&self) -> Result<Vec<Guide>, AppError> {
        Ok(self.guides.clone())
    }

    async fn find_guide(&self, slug: &str) -> Result<Option<Guide>, AppError> {
        Ok(self.guides.iter().find(|g| g.slug == slug).cloned())
    }

    async fn tools(&self) -> Result<Vec<Tool>, AppError> {
        Ok(self.tools.clone())
    }

    async fn find_tool(&self, slug: &str) -> Result<Option<Tool>, AppError> {
        Ok(self.tools.iter().find(|t| t.slug == slug).cloned())
    }

    async fn faqs(&self) -> Result<Vec<Faq>, AppError> {
        Ok(self.faqs.clone())
    }
}
