//! Calculator tool pages.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};

use crate::domain::entities::{BreadcrumbSegment, PageMetadata, Tool};
use crate::domain::seo::{BreadcrumbTrail, HeadModel};
use crate::state::AppState;
use crate::web::forms::{CalculatorForm, build_form};
use crate::web::structured_data;
use crate::web::page::{PageContext, PageError};

#[derive(Template, WebTemplate)]
#[template(path = "tools.html")]
pub struct ToolsTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub tools: Vec<Tool>,
}

#[derive(Template, WebTemplate)]
#[template(path = "tool.html")]
pub struct ToolTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub tool: Tool,
    pub form: CalculatorForm,
    pub related: Vec<Tool>,
}

/// Lists every calculator.
///
/// `GET /tools`
pub async fn tools_handler(
    State(state): State<AppState>,
    page: PageContext,
) -> Result<ToolsTemplate, PageError> {
    let tools = state
        .content_service
        .list_tools()
        .await
        .map_err(|e| page.error(e))?;

    let metadata = PageMetadata::new(
        "Salary & Pay Raise Calculators",
        "Every free calculator in one place: raises, inflation, hourly pay, cost of living, promotions and total compensation.",
    )
    .with_canonical_path("/tools");

    Ok(ToolsTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[BreadcrumbSegment::new("Tools", "/tools")])),
        tools,
    })
}

/// Renders a calculator page and, when the form was submitted, its results.
///
/// # Endpoint
///
/// `GET /tools/{slug}?field=value...`
///
/// Publishes the `SoftwareApplication` structured data object.
///
/// # Errors
///
/// Unknown slugs render the 404 page.
pub async fn tool_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    page: PageContext,
) -> Result<ToolTemplate, PageError> {
    let service = &state.content_service;
    let tool = service.get_tool(&slug).await.map_err(|e| page.error(e))?;
    let related = service
        .list_tools()
        .await
        .map_err(|e| page.error(e))?
        .into_iter()
        .filter(|t| t.slug != tool.slug)
        .collect();

    let path = tool.path();
    let metadata = PageMetadata::new(tool.title.clone(), tool.description.clone())
        .with_canonical_path(path.clone())
        .with_keywords(tool.keywords.clone())
        .with_structured_data(structured_data::for_tool(&page.site, &tool));

    let form = build_form(tool.calculator, &params);
    if let Some(error) = &form.error {
        tracing::debug!(tool = %tool.slug, "Calculator rejected input: {}", error);
    }

    Ok(ToolTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[
            BreadcrumbSegment::new("Tools", "/tools"),
            BreadcrumbSegment::new(tool.name.clone(), path),
        ])),
        tool,
        form,
        related,
    })
}
