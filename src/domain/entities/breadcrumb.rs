//! Breadcrumb segment supplied by a page.

/// One step of a breadcrumb trail, excluding the implicit Home root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    pub name: String,
    /// Site-relative path of the segment.
    pub path: String,
}

impl BreadcrumbSegment {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The implicit root every trail starts with.
    pub fn home() -> Self {
        Self::new("Home", "/")
    }
}
