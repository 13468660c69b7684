//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{Article, Guide, PageMetadata, Tool};
use crate::domain::seo::schema;
use crate::domain::seo::{BreadcrumbTrail, HeadModel};
use crate::state::AppState;
use crate::web::page::{PageContext, PageError};

/// Articles featured on the home page.
const LATEST_ARTICLES: usize = 3;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub tools: Vec<Tool>,
    pub articles: Vec<Article>,
    pub guides: Vec<Guide>,
}

/// Renders the home page with the tool grid and latest content.
///
/// # Endpoint
///
/// `GET /`
///
/// Publishes the `WebSite` structured data object.
pub async fn home_handler(
    State(state): State<AppState>,
    page: PageContext,
) -> Result<HomeTemplate, PageError> {
    let service = &state.content_service;
    let tools = service.list_tools().await.map_err(|e| page.error(e))?;
    let mut articles = service.list_articles().await.map_err(|e| page.error(e))?;
    articles.truncate(LATEST_ARTICLES);
    let guides = service.list_guides().await.map_err(|e| page.error(e))?;

    let metadata = PageMetadata::new(
        format!("{} - Free Salary & Pay Raise Calculators", page.site.name),
        page.site.description.clone(),
    )
    .with_canonical_path("/")
    .with_structured_data(schema::website(&page.site));

    Ok(HomeTemplate {
        head: page.head(&metadata),
        breadcrumbs: None,
        tools,
        articles,
        guides,
    })
}
