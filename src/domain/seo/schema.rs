//! Structured-data (schema.org JSON-LD) records and their builders.
//!
//! Every builder is a total function: it takes the site identity plus a typed
//! input record and returns a fully populated schema object. Optional inputs
//! fall back to documented defaults; nothing is validated.
//!
//! # Vocabulary
//!
//! Field names are serialized exactly as search engines expect them
//! (`@context`, `@type`, `headline`, `datePublished`, `mainEntity`,
//! `itemListElement`, ...). Renaming any of them breaks rich results.
//!
//! # Example
//!
//! ```ignore
//! let schema = schema::calculator(&site, CalculatorSchemaInput::new(
//!     "Pay Raise Calculator",
//!     "Work out your new salary",
//!     "https://www.payraisecalculator.com/tools/pay-raise-calculator",
//! ));
//! assert_eq!(schema.application_category, "FinanceApplication");
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::domain::entities::{BreadcrumbSegment, Faq, GuideStep, SiteIdentity};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Category announced for every calculator.
pub const FINANCE_APPLICATION: &str = "FinanceApplication";

/// Features published when a calculator does not list its own.
pub const DEFAULT_FEATURES: [&str; 4] = [
    "Instant salary increase calculation",
    "Percentage and dollar raise breakdown",
    "Monthly and hourly pay equivalents",
    "Free to use with no sign-up required",
];

// =============================================================================
// Shared nested objects
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: "ImageObject",
            url: url.into(),
        }
    }
}

/// A person or organization credited as author, publisher or provider.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agent {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: Option<String>,
    pub logo: Option<ImageObject>,
}

impl Agent {
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
            url: None,
            logo: None,
        }
    }

    /// The site's own organization, including its logo.
    pub fn organization(site: &SiteIdentity) -> Self {
        Self {
            kind: "Organization",
            name: site.name.clone(),
            url: Some(site.origin()),
            logo: Some(ImageObject::new(site.logo_url())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub price: String,
    pub price_currency: String,
}

impl Offer {
    pub fn free() -> Self {
        Self {
            kind: "Offer",
            price: "0".to_string(),
            price_currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub rating_value: String,
    pub rating_count: u32,
    pub best_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

// =============================================================================
// Schema records
// =============================================================================

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareApplicationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub application_category: String,
    pub operating_system: String,
    pub offers: Offer,
    pub feature_list: Vec<String>,
    pub provider: Agent,
    pub aggregate_rating: Option<AggregateRating>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: NaiveDate,
    pub date_modified: NaiveDate,
    pub author: Agent,
    pub publisher: Agent,
    pub main_entity_of_page: WebPageRef,
    pub image: Option<String>,
    pub keywords: Option<String>,
    pub article_section: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub text: String,
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub total_time: Option<String>,
    pub step: Vec<HowToStep>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResourceSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub educational_level: String,
    pub learning_resource_type: String,
    pub in_language: String,
    pub provider: Agent,
    pub time_required: Option<String>,
    pub teaches: Option<String>,
    pub date_published: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbListSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub description: String,
    pub in_language: String,
    pub publisher: Agent,
}

/// Any structured-data object a page can embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    SoftwareApplication(SoftwareApplicationSchema),
    Article(ArticleSchema),
    HowTo(HowToSchema),
    LearningResource(LearningResourceSchema),
    FaqPage(FaqPageSchema),
    BreadcrumbList(BreadcrumbListSchema),
    Organization(OrganizationSchema),
    WebSite(WebSiteSchema),
}

impl StructuredData {
    /// The `@type` marker of the wrapped object.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SoftwareApplication(s) => s.kind,
            Self::Article(s) => s.kind,
            Self::HowTo(s) => s.kind,
            Self::LearningResource(s) => s.kind,
            Self::FaqPage(s) => s.kind,
            Self::BreadcrumbList(s) => s.kind,
            Self::Organization(s) => s.kind,
            Self::WebSite(s) => s.kind,
        }
    }

    /// Serializes for an inline `<script type="application/ld+json">` block.
    pub fn to_json_ld(&self) -> String {
        to_json_ld(self)
    }

    /// Indented JSON for human consumption.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize {} schema: {}", self.kind(), e);
            "{}".to_string()
        })
    }
}

/// Serializes a schema value for inline embedding.
///
/// `<` is emitted as `\u003c` so the payload can never close the
/// surrounding `<script>` element.
pub fn to_json_ld<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace('<', "\\u003c"),
        Err(e) => {
            tracing::error!("Failed to serialize structured data: {}", e);
            "{}".to_string()
        }
    }
}

macro_rules! impl_from_schema {
    ($($schema:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$schema> for StructuredData {
                fn from(value: $schema) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_schema! {
    SoftwareApplicationSchema => SoftwareApplication,
    ArticleSchema => Article,
    HowToSchema => HowTo,
    LearningResourceSchema => LearningResource,
    FaqPageSchema => FaqPage,
    BreadcrumbListSchema => BreadcrumbList,
    OrganizationSchema => Organization,
    WebSiteSchema => WebSite,
}

// =============================================================================
// Builder inputs
// =============================================================================

/// Input for [`calculator`].
#[derive(Debug, Clone, Default)]
pub struct CalculatorSchemaInput {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Defaults to [`DEFAULT_FEATURES`] when `None` or empty.
    pub feature_list: Option<Vec<String>>,
    /// `(average, count)` of user ratings.
    pub rating: Option<(f64, u32)>,
}

impl CalculatorSchemaInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Input for [`article`].
#[derive(Debug, Clone)]
pub struct ArticleSchemaInput {
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: NaiveDate,
    /// Defaults to `date_published`.
    pub date_modified: Option<NaiveDate>,
    /// Defaults to the site organization.
    pub author: Option<Agent>,
    pub image: Option<String>,
    pub keywords: Option<String>,
    pub section: Option<String>,
}

/// Input for [`how_to`].
#[derive(Debug, Clone)]
pub struct HowToSchemaInput {
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub total_time: Option<String>,
    pub steps: Vec<GuideStep>,
}

/// Input for [`learning_resource`].
#[derive(Debug, Clone, Default)]
pub struct LearningResourceSchemaInput {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Defaults to `Beginner`.
    pub educational_level: Option<String>,
    /// Defaults to `Guide`.
    pub resource_type: Option<String>,
    pub time_required: Option<String>,
    pub teaches: Option<String>,
    pub date_published: Option<NaiveDate>,
}

// =============================================================================
// Builders
// =============================================================================

/// Builds the `SoftwareApplication` object for a calculator page.
pub fn calculator(site: &SiteIdentity, input: CalculatorSchemaInput) -> SoftwareApplicationSchema {
    let feature_list = match input.feature_list {
        Some(features) if !features.is_empty() => features,
        _ => DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
    };

    let aggregate_rating = input.rating.map(|(value, count)| AggregateRating {
        kind: "AggregateRating",
        rating_value: format!("{value:.1}"),
        rating_count: count,
        best_rating: "5".to_string(),
    });

    SoftwareApplicationSchema {
        context: SCHEMA_CONTEXT,
        kind: "SoftwareApplication",
        name: input.name,
        description: input.description,
        url: input.url,
        application_category: FINANCE_APPLICATION.to_string(),
        operating_system: "Any".to_string(),
        offers: Offer::free(),
        feature_list,
        provider: Agent::organization(site),
        aggregate_rating,
    }
}

/// Builds the `Article` object for a blog post.
pub fn article(site: &SiteIdentity, input: ArticleSchemaInput) -> ArticleSchema {
    ArticleSchema {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        date_modified: input.date_modified.unwrap_or(input.date_published),
        date_published: input.date_published,
        author: input.author.unwrap_or_else(|| Agent::organization(site)),
        publisher: Agent::organization(site),
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: input.url.clone(),
        },
        headline: input.headline,
        description: input.description,
        url: input.url,
        image: input.image,
        keywords: input.keywords,
        article_section: input.section,
    }
}

/// Builds the `HowTo` object for a step-by-step guide.
pub fn how_to(_site: &SiteIdentity, input: HowToSchemaInput) -> HowToSchema {
    let step = input
        .steps
        .into_iter()
        .enumerate()
        .map(|(index, s)| HowToStep {
            kind: "HowToStep",
            position: index + 1,
            name: s.name,
            text: s.text,
            url: None,
        })
        .collect();

    HowToSchema {
        context: SCHEMA_CONTEXT,
        kind: "HowTo",
        name: input.name,
        description: input.description,
        url: input.url,
        total_time: input.total_time,
        step,
    }
}

/// Builds the `LearningResource` object for a general guide.
pub fn learning_resource(
    site: &SiteIdentity,
    input: LearningResourceSchemaInput,
) -> LearningResourceSchema {
    LearningResourceSchema {
        context: SCHEMA_CONTEXT,
        kind: "LearningResource",
        name: input.name,
        description: input.description,
        url: input.url,
        educational_level: input
            .educational_level
            .unwrap_or_else(|| "Beginner".to_string()),
        learning_resource_type: input.resource_type.unwrap_or_else(|| "Guide".to_string()),
        in_language: "en-US".to_string(),
        provider: Agent::organization(site),
        time_required: input.time_required,
        teaches: input.teaches,
        date_published: input.date_published,
    }
}

/// Builds the `FAQPage` object from question/answer pairs.
pub fn faq_page(_site: &SiteIdentity, faqs: &[Faq]) -> FaqPageSchema {
    FaqPageSchema {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    }
}

/// Builds the `BreadcrumbList` object for an already rooted trail.
///
/// Positions are 1-based and contiguous; `item` URLs are absolute.
pub fn breadcrumb_list(site: &SiteIdentity, segments: &[BreadcrumbSegment]) -> BreadcrumbListSchema {
    BreadcrumbListSchema {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: segments
            .iter()
            .enumerate()
            .map(|(index, segment)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: segment.name.clone(),
                item: site.absolute_url(&segment.path),
            })
            .collect(),
    }
}

/// Builds the `Organization` object describing the site owner.
pub fn organization(site: &SiteIdentity) -> OrganizationSchema {
    OrganizationSchema {
        context: SCHEMA_CONTEXT,
        kind: "Organization",
        name: site.name.clone(),
        url: site.origin(),
        logo: ImageObject::new(site.logo_url()),
        description: site.description.clone(),
        same_as: site.same_as.clone(),
    }
}

/// Builds the `WebSite` object for the home page.
pub fn website(site: &SiteIdentity) -> WebSiteSchema {
    WebSiteSchema {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        name: site.name.clone(),
        url: site.origin(),
        description: site.description.clone(),
        in_language: "en-US".to_string(),
        publisher: Agent::organization(site),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn site() -> SiteIdentity {
        SiteIdentity::default()
    }

    fn to_value<T: Serialize>(value: &T) -> Value {
        serde_json::to_value(value).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calculator_defaults() {
        let schema = calculator(
            &site(),
            CalculatorSchemaInput::new("X", "d", "https://site/x"),
        );
        let json = to_value(&schema);

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "SoftwareApplication");
        assert_eq!(json["url"], "https://site/x");
        assert_eq!(json["applicationCategory"], "FinanceApplication");
        assert_eq!(json["featureList"].as_array().unwrap().len(), 4);
        assert_eq!(json["offers"]["price"], "0");
        assert_eq!(json["provider"]["name"], "PayRaise Calculator");
        assert!(json.get("aggregateRating").is_none());
    }

    #[test]
    fn test_calculator_empty_feature_list_uses_defaults() {
        let mut input = CalculatorSchemaInput::new("X", "d", "https://site/x");
        input.feature_list = Some(vec![]);

        let schema = calculator(&site(), input);
        assert_eq!(schema.feature_list.len(), DEFAULT_FEATURES.len());
    }

    #[test]
    fn test_calculator_custom_features_and_rating() {
        let mut input = CalculatorSchemaInput::new("X", "d", "https://site/x");
        input.feature_list = Some(vec!["One".to_string()]);
        input.rating = Some((4.84, 120));

        let json = to_value(&calculator(&site(), input));
        assert_eq!(json["featureList"], json!(["One"]));
        assert_eq!(json["aggregateRating"]["ratingValue"], "4.8");
        assert_eq!(json["aggregateRating"]["ratingCount"], 120);
    }

    #[test]
    fn test_article_date_modified_defaults_to_published() {
        let schema = article(
            &site(),
            ArticleSchemaInput {
                headline: "How to ask for a raise".to_string(),
                description: "d".to_string(),
                url: "https://site/blog/raise".to_string(),
                date_published: date(2024, 5, 2),
                date_modified: None,
                author: None,
                image: None,
                keywords: None,
                section: None,
            },
        );
        let json = to_value(&schema);

        assert_eq!(json["datePublished"], "2024-05-02");
        assert_eq!(json["dateModified"], "2024-05-02");
        assert_eq!(json["author"]["@type"], "Organization");
        assert_eq!(json["publisher"]["logo"]["@type"], "ImageObject");
        assert_eq!(json["mainEntityOfPage"]["@id"], "https://site/blog/raise");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_article_explicit_author_and_modified() {
        let schema = article(
            &site(),
            ArticleSchemaInput {
                headline: "h".to_string(),
                description: "d".to_string(),
                url: "u".to_string(),
                date_published: date(2024, 1, 1),
                date_modified: Some(date(2024, 6, 1)),
                author: Some(Agent::person("Jordan Lee")),
                image: Some("https://site/img.png".to_string()),
                keywords: Some("raise".to_string()),
                section: Some("Negotiation".to_string()),
            },
        );
        let json = to_value(&schema);

        assert_eq!(json["dateModified"], "2024-06-01");
        assert_eq!(json["author"], json!({ "@type": "Person", "name": "Jordan Lee" }));
        assert_eq!(json["articleSection"], "Negotiation");
    }

    #[test]
    fn test_how_to_positions_are_contiguous() {
        let schema = how_to(
            &site(),
            HowToSchemaInput {
                name: "n".to_string(),
                description: "d".to_string(),
                url: None,
                total_time: Some("PT10M".to_string()),
                steps: vec![
                    GuideStep::new("a", "1"),
                    GuideStep::new("b", "2"),
                    GuideStep::new("c", "3"),
                ],
            },
        );
        let positions: Vec<usize> = schema.step.iter().map(|s| s.position).collect();

        assert_eq!(positions, vec![1, 2, 3]);
        let json = to_value(&schema);
        assert_eq!(json["totalTime"], "PT10M");
        assert_eq!(json["step"][0]["@type"], "HowToStep");
    }

    #[test]
    fn test_learning_resource_defaults() {
        let json = to_value(&learning_resource(
            &site(),
            LearningResourceSchemaInput {
                name: "n".to_string(),
                description: "d".to_string(),
                url: "u".to_string(),
                ..Default::default()
            },
        ));

        assert_eq!(json["@type"], "LearningResource");
        assert_eq!(json["educationalLevel"], "Beginner");
        assert_eq!(json["learningResourceType"], "Guide");
        assert_eq!(json["inLanguage"], "en-US");
    }

    #[test]
    fn test_faq_page_shape() {
        let faqs = vec![Faq::new("Q1?", "A1"), Faq::new("Q2?", "A2")];
        let json = to_value(&faq_page(&site(), &faqs));

        assert_eq!(json["@type"], "FAQPage");
        assert_eq!(json["mainEntity"].as_array().unwrap().len(), 2);
        assert_eq!(json["mainEntity"][0]["@type"], "Question");
        assert_eq!(json["mainEntity"][0]["acceptedAnswer"]["text"], "A1");
    }

    #[test]
    fn test_breadcrumb_list_absolute_items() {
        let segments = vec![
            BreadcrumbSegment::home(),
            BreadcrumbSegment::new("Blog", "/blog"),
        ];
        let json = to_value(&breadcrumb_list(&site(), &segments));

        assert_eq!(json["itemListElement"][0]["position"], 1);
        assert_eq!(
            json["itemListElement"][1]["item"],
            "https://www.payraisecalculator.com/blog"
        );
    }

    #[test]
    fn test_organization_omits_empty_same_as() {
        let json = to_value(&organization(&site()));
        assert_eq!(json["@type"], "Organization");
        assert!(json.get("sameAs").is_none());
    }

    #[test]
    fn test_website_schema() {
        let json = to_value(&website(&site()));
        assert_eq!(json["@type"], "WebSite");
        assert_eq!(json["url"], "https://www.payraisecalculator.com");
    }

    #[test]
    fn test_json_ld_escapes_script_close() {
        let data: StructuredData = faq_page(&site(), &[Faq::new("</script>", "a")]).into();
        let json = data.to_json_ld();

        assert!(!json.contains("</script>"));
        assert!(json.contains("\\u003c/script>"));
        assert_eq!(data.kind(), "FAQPage");
    }
}
