//! Structured data for catalog content.
//!
//! Shared by the page handlers and the `payraise schema` command so both
//! publish identical JSON-LD.

use crate::domain::entities::{Article, Guide, SiteIdentity, Tool};
use crate::domain::seo::schema::{
    self, Agent, ArticleSchemaInput, CalculatorSchemaInput, HowToSchemaInput,
    LearningResourceSchemaInput, StructuredData,
};

/// `SoftwareApplication` for a calculator page.
pub fn for_tool(site: &SiteIdentity, tool: &Tool) -> StructuredData {
    let mut input = CalculatorSchemaInput::new(
        tool.name.clone(),
        tool.description.clone(),
        site.absolute_url(&tool.path()),
    );
    input.feature_list = Some(tool.features.clone());

    schema::calculator(site, input).into()
}

/// `Article` for a blog post; bylined posts credit a person.
pub fn for_article(site: &SiteIdentity, article: &Article) -> StructuredData {
    schema::article(
        site,
        ArticleSchemaInput {
            headline: article.title.clone(),
            description: article.description.clone(),
            url: site.absolute_url(&article.path()),
            date_published: article.published,
            date_modified: article.modified,
            author: article.author.as_deref().map(Agent::person),
            image: Some(site.default_image_url()),
            keywords: Some(article.keywords.clone()),
            section: Some(article.category.clone()),
        },
    )
    .into()
}

/// `HowTo` for guides with steps, `LearningResource` otherwise.
pub fn for_guide(site: &SiteIdentity, guide: &Guide) -> StructuredData {
    let url = site.absolute_url(&guide.path());

    if guide.is_how_to() {
        schema::how_to(
            site,
            HowToSchemaInput {
                name: guide.title.clone(),
                description: guide.description.clone(),
                url: Some(url),
                total_time: Some(guide.iso_duration()),
                steps: guide.steps.clone(),
            },
        )
        .into()
    } else {
        schema::learning_resource(
            site,
            LearningResourceSchemaInput {
                name: guide.title.clone(),
                description: guide.description.clone(),
                url,
                educational_level: Some(guide.level.clone()),
                time_required: Some(guide.iso_duration()),
                date_published: Some(guide.published),
                ..Default::default()
            },
        )
        .into()
    }
}
