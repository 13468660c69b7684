//! Guide index and guide pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::domain::entities::{BreadcrumbSegment, Guide, PageMetadata};
use crate::domain::seo::{BreadcrumbTrail, HeadModel};
use crate::state::AppState;
use crate::web::page::{PageContext, PageError};
use crate::web::structured_data;

#[derive(Template, WebTemplate)]
#[template(path = "guides.html")]
pub struct GuidesTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub guides: Vec<Guide>,
}

#[derive(Template, WebTemplate)]
#[template(path = "guide.html")]
pub struct GuideTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub guide: Guide,
}

/// `GET /guides`
pub async fn guides_handler(
    State(state): State<AppState>,
    page: PageContext,
) -> Result<GuidesTemplate, PageError> {
    let guides = state
        .content_service
        .list_guides()
        .await
        .map_err(|e| page.error(e))?;

    let metadata = PageMetadata::new(
        "Salary Guides",
        "Step-by-step guides to negotiating pay, relocating and understanding total compensation.",
    )
    .with_canonical_path("/guides");

    Ok(GuidesTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[BreadcrumbSegment::new("Guides", "/guides")])),
        guides,
    })
}

/// Renders a guide.
///
/// # Endpoint
///
/// `GET /guides/{slug}`
///
/// Guides with steps publish `HowTo` structured data, the others
/// `LearningResource`.
pub async fn guide_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    page: PageContext,
) -> Result<GuideTemplate, PageError> {
    let guide = state
        .content_service
        .get_guide(&slug)
        .await
        .map_err(|e| page.error(e))?;

    let path = guide.path();
    let metadata = PageMetadata::new(guide.title.clone(), guide.description.clone())
        .with_canonical_path(path.clone())
        .with_keywords(guide.keywords.clone())
        .with_structured_data(structured_data::for_guide(&page.site, &guide));

    Ok(GuideTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[
            BreadcrumbSegment::new("Guides", "/guides"),
            BreadcrumbSegment::new(guide.title.clone(), path),
        ])),
        guide,
    })
}
