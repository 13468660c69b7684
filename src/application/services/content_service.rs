//! Content lookup and sitemap assembly service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Article, Faq, Guide, Tool};
use crate::domain::repositories::ContentRepository;
use crate::domain::seo::SitemapEntry;
use crate::error::AppError;
use crate::utils::slug::is_valid_slug;

/// Site sections with a fixed path, listed in the sitemap before content.
const STATIC_PAGES: &[(&str, f32)] = &[
    ("/", 1.0),
    ("/tools", 0.9),
    ("/blog", 0.8),
    ("/guides", 0.8),
    ("/faq", 0.6),
    ("/about", 0.5),
];

/// Service for reading catalog content.
///
/// Translates missing content into [`AppError::NotFound`] and orders lists
/// for display.
pub struct ContentService<R: ContentRepository> {
    repository: Arc<R>,
}

impl<R: ContentRepository> ContentService<R> {
    /// Creates a new content service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists blog articles, newest first.
    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        let mut articles = self.repository.articles().await?;
        articles.sort_by(|a, b| b.published.cmp(&a.published));
        Ok(articles)
    }

    /// Retrieves a blog article by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown slugs.
    pub async fn get_article(&self, slug: &str) -> Result<Article, AppError> {
        if !is_valid_slug(slug) {
            return Err(not_found("Article", slug));
        }
        self.repository
            .find_article(slug)
            .await?
            .ok_or_else(|| not_found("Article", slug))
    }

    /// Lists guides in catalog order.
    pub async fn list_guides(&self) -> Result<Vec<Guide>, AppError> {
        self.repository.guides().await
    }

    /// Retrieves a guide by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown slugs.
    pub async fn get_guide(&self, slug: &str) -> Result<Guide, AppError> {
        if !is_valid_slug(slug) {
            return Err(not_found("Guide", slug));
        }
        self.repository
            .find_guide(slug)
            .await?
            .ok_or_else(|| not_found("Guide", slug))
    }

    /// Lists calculator tools in catalog order.
    pub async fn list_tools(&self) -> Result<Vec<Tool>, AppError> {
        self.repository.tools().await
    }

    /// Retrieves a calculator tool by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown slugs.
    pub async fn get_tool(&self, slug: &str) -> Result<Tool, AppError> {
        if !is_valid_slug(slug) {
            return Err(not_found("Tool", slug));
        }
        self.repository
            .find_tool(slug)
            .await?
            .ok_or_else(|| not_found("Tool", slug))
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>, AppError> {
        self.repository.faqs().await
    }

    /// Every routable page, for `sitemap.xml`.
    pub async fn sitemap_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let tools = self.repository.tools().await?;
        let articles = self.list_articles().await?;
        let guides = self.repository.guides().await?;

        let mut entries: Vec<SitemapEntry> = STATIC_PAGES
            .iter()
            .map(|(path, priority)| SitemapEntry::new(*path, None, *priority))
            .collect();

        entries.extend(
            tools
                .iter()
                .map(|t| SitemapEntry::new(t.path(), Some(t.updated), 0.9)),
        );
        entries.extend(
            articles
                .iter()
                .map(|a| SitemapEntry::new(a.path(), Some(a.last_modified()), 0.7)),
        );
        entries.extend(
            guides
                .iter()
                .map(|g| SitemapEntry::new(g.path(), Some(g.last_modified()), 0.7)),
        );

        Ok(entries)
    }

    /// Number of routable pages.
    pub async fn page_count(&self) -> Result<usize, AppError> {
        Ok(self.sitemap_entries().await?.len())
    }
}

fn not_found(kind: &str, slug: &str) -> AppError {
    AppError::not_found(format!("{kind} not found"), json!({ "slug": slug }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContentRepository;
    use chrono::NaiveDate;

    fn article(slug: &str, published: (i32, u32, u32)) -> Article {
        Article {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: "d".to_string(),
            keywords: String::new(),
            author: None,
            category: "c".to_string(),
            published: NaiveDate::from_ymd_opt(published.0, published.1, published.2).unwrap(),
            modified: None,
            reading_minutes: 3,
            sections: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_articles_newest_first() {
        let mut repo = MockContentRepository::new();
        repo.expect_articles().returning(|| {
            Ok(vec![
                article("old", (2023, 1, 1)),
                article("new", (2024, 6, 1)),
                article("mid", (2024, 1, 1)),
            ])
        });

        let service = ContentService::new(Arc::new(repo));
        let slugs: Vec<String> = service
            .list_articles()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.slug)
            .collect();

        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_get_article_not_found() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_article().returning(|_| Ok(None));

        let service = ContentService::new(Arc::new(repo));
        let err = service.get_article("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_invalid_slug_skips_repository() {
        let mut repo = MockContentRepository::new();
        repo.expect_find_tool().never();

        let service = ContentService::new(Arc::new(repo));
        let err = service.get_tool("../etc/passwd").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_sitemap_entries_include_static_pages_and_content() {
        let mut repo = MockContentRepository::new();
        repo.expect_tools().returning(|| Ok(vec![]));
        repo.expect_guides().returning(|| Ok(vec![]));
        repo.expect_articles()
            .returning(|| Ok(vec![article("post", (2024, 2, 2))]));

        let service = ContentService::new(Arc::new(repo));
        let entries = service.sitemap_entries().await.unwrap();

        assert_eq!(entries.len(), STATIC_PAGES.len() + 1);
        assert_eq!(entries[0].path, "/");
        let post = entries.last().unwrap();
        assert_eq!(post.path, "/blog/post");
        assert_eq!(post.lastmod, NaiveDate::from_ymd_opt(2024, 2, 2));
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockContentRepository::new();
        repo.expect_faqs()
            .returning(|| Err(AppError::internal("boom", serde_json::json!({}))));

        let service = ContentService::new(Arc::new(repo));
        assert!(matches!(
            service.faqs().await,
            Err(AppError::Internal { .. })
        ));
    }
}
