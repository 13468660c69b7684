//! Repository trait for catalog content.

use crate::domain::entities::{Article, Faq, Guide, Tool};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for site content.
///
/// Read-only access to blog articles, guides, calculator tools and the site
/// FAQ. Lookups by slug return `Ok(None)` when nothing matches; callers decide
/// whether that is a 404.
///
/// # Implementations
///
/// - [`crate::infrastructure::content::StaticContentRepository`] - inline catalog
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Lists all blog articles in catalog order.
    async fn articles(&self) -> Result<Vec<Article>, AppError>;

    /// Finds a blog article by slug.
    async fn find_article(&self, slug: &str) -> Result<Option<Article>, AppError>;

    /// Lists all guides in catalog order.
    async fn guides(&self) -> Result<Vec<Guide>, AppError>;

    /// Finds a guide by slug.
    async fn find_guide(&self, slug: &str) -> Result<Option<Guide>, AppError>;

    /// Lists all calculator tools in catalog order.
    async fn tools(&self) -> Result<Vec<Tool>, AppError>;

    /// Finds a calculator tool by slug.
    async fn find_tool(&self, slug: &str) -> Result<Option<Tool>, AppError>;

    /// Site-wide frequently asked questions.
    async fn faqs(&self) -> Result<Vec<Faq>, AppError>;
}
