//! FAQ and about pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{BreadcrumbSegment, Faq, PageMetadata};
use crate::domain::seo::schema;
use crate::domain::seo::{BreadcrumbTrail, HeadModel};
use crate::state::AppState;
use crate::web::page::{PageContext, PageError};

#[derive(Template, WebTemplate)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub faqs: Vec<Faq>,
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub head: HeadModel,
    pub breadcrumbs: Option<BreadcrumbTrail>,
    pub site_name: String,
    pub description: String,
}

/// Site FAQ with `FAQPage` structured data.
///
/// `GET /faq`
pub async fn faq_handler(
    State(state): State<AppState>,
    page: PageContext,
) -> Result<FaqTemplate, PageError> {
    let faqs = state
        .content_service
        .faqs()
        .await
        .map_err(|e| page.error(e))?;

    let metadata = PageMetadata::new(
        "Frequently Asked Questions",
        "Answers to common questions about pay raises, salary calculations and how our calculators work.",
    )
    .with_canonical_path("/faq")
    .with_structured_data(schema::faq_page(&page.site, &faqs));

    Ok(FaqTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[BreadcrumbSegment::new("FAQ", "/faq")])),
        faqs,
    })
}

/// About page with `Organization` structured data.
///
/// `GET /about`
pub async fn about_handler(page: PageContext) -> AboutTemplate {
    let metadata = PageMetadata::new(
        format!("About {}", page.site.name),
        page.site.description.clone(),
    )
    .with_canonical_path("/about")
    .with_structured_data(schema::organization(&page.site));

    AboutTemplate {
        head: page.head(&metadata),
        breadcrumbs: Some(page.breadcrumbs(&[BreadcrumbSegment::new("About", "/about")])),
        site_name: page.site.name.clone(),
        description: page.site.description.clone(),
    }
}
