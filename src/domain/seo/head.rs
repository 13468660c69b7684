//! Document head composition: title, canonical URL and social metadata.

use crate::domain::entities::{PageMetadata, SiteIdentity};

/// Robots directive emitted on every page.
pub const ROBOTS: &str = "index, follow";

/// Twitter card type emitted on every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// Fully derived document metadata, ready for the `head.html` template.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadModel {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub robots: &'static str,
    pub site_name: String,
    pub locale: String,
    pub og_type: &'static str,
    pub image_url: String,
    pub twitter_card: &'static str,
    pub twitter_site: Option<String>,
    /// Inline JSON-LD payload, already escaped for `<script>` embedding.
    pub json_ld: Option<String>,
}

/// Appends the brand suffix unless the title already mentions the brand.
///
/// Idempotent: composing an already composed title returns it unchanged.
///
/// ```ignore
/// assert_eq!(compose_title(&site, "Home"), "Home | PayRaise Calculator");
/// ```
pub fn compose_title(site: &SiteIdentity, title: &str) -> String {
    if title.contains(site.name.as_str()) {
        title.to_string()
    } else {
        format!("{} | {}", title, site.name)
    }
}

/// Derives the rendered head from page metadata.
///
/// # Arguments
///
/// - `site` - brand and origin the title suffix and URLs derive from
/// - `metadata` - page-supplied title, description and structured data
/// - `current_path` - request path, used when the page sets no canonical path
pub fn compose_head(site: &SiteIdentity, metadata: &PageMetadata, current_path: &str) -> HeadModel {
    let canonical_path = metadata
        .canonical_path
        .as_deref()
        .unwrap_or(current_path);

    HeadModel {
        title: compose_title(site, &metadata.title),
        description: metadata.description.clone(),
        keywords: metadata
            .keywords
            .clone()
            .unwrap_or_else(|| site.default_keywords.clone()),
        canonical_url: site.absolute_url(canonical_path),
        robots: ROBOTS,
        site_name: site.name.clone(),
        locale: site.locale.clone(),
        og_type: metadata.og_type.as_str(),
        image_url: site.default_image_url(),
        twitter_card: TWITTER_CARD,
        twitter_site: site.twitter_handle.clone(),
        json_ld: metadata.structured_data.as_ref().map(|d| d.to_json_ld()),
    }
}
