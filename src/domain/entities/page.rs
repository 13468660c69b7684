//! Page-level metadata supplied by each page at render time.

use crate::domain::seo::schema::StructuredData;

/// Open Graph object type announced by a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenGraphType {
    #[default]
    Website,
    Article,
}

impl OpenGraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Declarative metadata for a single page.
///
/// Consumed by [`crate::domain::seo::head::compose_head`] to produce the
/// rendered document head.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Site-relative canonical path. Falls back to the request path.
    pub canonical_path: Option<String>,
    /// Comma-separated keywords. Falls back to the site defaults.
    pub keywords: Option<String>,
    pub structured_data: Option<StructuredData>,
    pub og_type: OpenGraphType,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical_path: None,
            keywords: None,
            structured_data: None,
            og_type: OpenGraphType::default(),
        }
    }

    pub fn with_canonical_path(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_structured_data(mut self, data: impl Into<StructuredData>) -> Self {
        self.structured_data = Some(data.into());
        self
    }

    pub fn with_og_type(mut self, og_type: OpenGraphType) -> Self {
        self.og_type = og_type;
        self
    }
}
