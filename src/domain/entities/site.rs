//! Site identity shared by every page composer and schema builder.

use url::Url;

/// Brand name used when no `SITE_NAME` is configured.
pub const DEFAULT_SITE_NAME: &str = "PayRaise Calculator";

/// Base origin used when no `SITE_URL` is configured.
pub const DEFAULT_SITE_URL: &str = "https://www.payraisecalculator.com";

/// Keywords rendered on pages that do not supply their own.
pub const DEFAULT_KEYWORDS: &str = "pay raise calculator, salary increase calculator, raise percentage calculator, salary calculator, cost of living adjustment";

const DEFAULT_DESCRIPTION: &str = "Free salary and pay raise calculators with guides on negotiating raises, \
     comparing cost of living, and understanding total compensation.";

/// Immutable configuration describing the site brand and origin.
///
/// Built once at startup and passed by reference into every composer, so
/// tests can substitute an alternate identity without shared global state.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIdentity {
    /// Brand string appended to page titles.
    pub name: String,
    /// Absolute origin every canonical URL is resolved against.
    pub base_url: Url,
    pub description: String,
    pub logo_path: String,
    pub default_image_path: String,
    pub default_keywords: String,
    /// Open Graph locale, e.g. `en_US`.
    pub locale: String,
    pub twitter_handle: Option<String>,
    /// Social profile links published in the organization schema.
    pub same_as: Vec<String>,
}

impl SiteIdentity {
    /// Creates an identity with the given brand and origin and default copy.
    pub fn new(name: impl Into<String>, base_url: Url) -> Self {
        Self {
            name: name.into(),
            base_url,
            description: DEFAULT_DESCRIPTION.to_string(),
            logo_path: "/static/logo.png".to_string(),
            default_image_path: "/static/og-image.png".to_string(),
            default_keywords: DEFAULT_KEYWORDS.to_string(),
            locale: "en_US".to_string(),
            twitter_handle: None,
            same_as: Vec::new(),
        }
    }

    pub fn with_twitter_handle(mut self, handle: Option<String>) -> Self {
        self.twitter_handle = handle;
        self
    }

    /// Resolves a site-relative path into an absolute URL on this origin.
    ///
    /// Paths without a leading slash are treated as rooted. Inputs that are
    /// already absolute URLs are returned unchanged.
    ///
    /// ```ignore
    /// assert_eq!(site.absolute_url("/blog"), "https://www.payraisecalculator.com/blog");
    /// ```
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let rooted = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        match self.base_url.join(&rooted) {
            Ok(url) => url.to_string(),
            Err(_) => format!(
                "{}{}",
                self.base_url.as_str().trim_end_matches('/'),
                rooted
            ),
        }
    }

    /// Origin without a trailing slash, as used for `WebSite.url`.
    ///
    /// Any path on `base_url` is ignored, matching how [`absolute_url`]
    /// resolves rooted paths.
    ///
    /// [`absolute_url`]: Self::absolute_url
    pub fn origin(&self) -> String {
        self.base_url.origin().ascii_serialization()
    }

    pub fn logo_url(&self) -> String {
        self.absolute_url(&self.logo_path)
    }

    pub fn default_image_url(&self) -> String {
        self.absolute_url(&self.default_image_path)
    }
}

impl Default for SiteIdentity {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_SITE_URL).expect("default site URL is valid");
        Self::new(DEFAULT_SITE_NAME, base_url)
    }
}
