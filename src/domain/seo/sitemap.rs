//! Sitemap generation.
//!
//! Renders a sitemaps.org 0.9 document listing every routable page.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://www.payraisecalculator.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use chrono::NaiveDate;

use crate::domain::entities::SiteIdentity;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Single page entry in the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Site-relative path.
    pub path: String,
    pub lastmod: Option<NaiveDate>,
    pub priority: f32,
}

impl SitemapEntry {
    pub fn new(path: impl Into<String>, lastmod: Option<NaiveDate>, priority: f32) -> Self {
        Self {
            path: path.into(),
            lastmod,
            priority,
        }
    }
}

/// Renders the sitemap XML for the given entries.
pub fn render_sitemap(site: &SiteIdentity, entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 128);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&site.absolute_url(&entry.path))
        ));
        if let Some(lastmod) = entry.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod.format("%Y-%m-%d")));
        }
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Renders `robots.txt` allowing all crawlers and pointing at the sitemap.
pub fn render_robots(site: &SiteIdentity) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\n",
        site.absolute_url("/sitemap.xml")
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
