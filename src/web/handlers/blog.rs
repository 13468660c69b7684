//! Blog index and article pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::domain::entities::{Article, BreadcrumbSegment, OpenGraphType, PageMetadata};
use crate::domain::seo::{BreadcrumbTrail, HeadModel};
use crate::state::AppState;
use crate::web::page::{PageContext, PageError};
use crate::web::structured_data;

#[derive(Template, WebTemplate)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub articles: Vec<Article>,
}

#[derive(Template, WebTemplate)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub article: Article,
}

/// `GET /blog`
pub async fn blog_handler(
    State(state): State<AppState>,
    page: PageContext,
) -> Result<BlogTemplate, PageError> {
    let articles = state
        .content_service
        .list_articles()
        .await
        .map_err(|e| page.error(e))?;

    let metadata = PageMetadata::new(
        "Salary & Raise Blog",
        "Articles on asking for a raise, industry raise benchmarks, inflation and promotion negotiation.",
    )
    .with_canonical_path("/blog");

    Ok(BlogTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[BreadcrumbSegment::new("Blog", "/blog")])),
        articles,
    })
}

/// Renders a blog article with `Article` structured data.
///
/// `GET /blog/{slug}`
pub async fn article_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    page: PageContext,
) -> Result<ArticleTemplate, PageError> {
    let article = state
        .content_service
        .get_article(&slug)
        .await
        .map_err(|e| page.error(e))?;

    let path = article.path();
    let metadata = PageMetadata::new(article.title.clone(), article.description.clone())
        .with_canonical_path(path.clone())
        .with_keywords(article.keywords.clone())
        .with_og_type(OpenGraphType::Article)
        .with_structured_data(structured_data::for_article(&page.site, &article));

    Ok(ArticleTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[
            BreadcrumbSegment::new("Blog", "/blog"),
            BreadcrumbSegment::new(article.title.clone(), path),
        ])),
        article,
    })
}
