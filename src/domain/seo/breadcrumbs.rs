//! Breadcrumb trail composition.

use crate::domain::entities::{BreadcrumbSegment, SiteIdentity};
use crate::domain::seo::schema::{self, BreadcrumbListSchema};

/// One rendered step of the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub name: String,
    pub path: String,
    /// 1-based position, matching the schema `ListItem.position`.
    pub position: usize,
    /// `false` only for the final (current page) item.
    pub is_link: bool,
}

/// Home-rooted trail plus its `BreadcrumbList` equivalent.
#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbTrail {
    pub items: Vec<BreadcrumbItem>,
    pub schema: BreadcrumbListSchema,
}

impl BreadcrumbTrail {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inline JSON-LD for the trail's schema object.
    pub fn json_ld(&self) -> String {
        schema::to_json_ld(&self.schema)
    }
}

/// Prepends Home to the page segments and derives the render model.
///
/// Positions run `1..=N+1`. The last item is never a link, whatever its
/// path; an empty input yields a trail holding only Home.
pub fn compose_breadcrumbs(site: &SiteIdentity, segments: &[BreadcrumbSegment]) -> BreadcrumbTrail {
    let full: Vec<BreadcrumbSegment> = std::iter::once(BreadcrumbSegment::home())
        .chain(segments.iter().cloned())
        .collect();

    let last = full.len() - 1;
    let items = full
        .iter()
        .enumerate()
        .map(|(index, segment)| BreadcrumbItem {
            name: segment.name.clone(),
            path: segment.path.clone(),
            position: index + 1,
            is_link: index != last,
        })
        .collect();

    BreadcrumbTrail {
        items,
        schema: schema::breadcrumb_list(site, &full),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteIdentity {
        SiteIdentity::default()
    }

    #[test]
    fn test_blog_post_trail() {
        let trail = compose_breadcrumbs(
            &site(),
            &[
                BreadcrumbSegment::new("Blog", "/blog"),
                BreadcrumbSegment::new("Post", "/blog/post"),
            ],
        );

        let names: Vec<&str> = trail.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Blog", "Post"]);

        let links: Vec<bool> = trail.items.iter().map(|i| i.is_link).collect();
        assert_eq!(links, vec![true, true, false]);

        let positions: Vec<usize> = trail
            .schema
            .item_list_element
            .iter()
            .map(|i| i.position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input_yields_home_only() {
        let trail = compose_breadcrumbs(&site(), &[]);

        assert_eq!(trail.len(), 1);
        assert_eq!(trail.items[0].name, "Home");
        assert!(!trail.items[0].is_link);
        assert_eq!(trail.schema.item_list_element.len(), 1);
    }

    #[test]
    fn test_length_and_positions_for_any_n() {
        for n in 0..6 {
            let segments: Vec<BreadcrumbSegment> = (0..n)
                .map(|i| BreadcrumbSegment::new(format!("S{i}"), format!("/s{i}")))
                .collect();
            let trail = compose_breadcrumbs(&site(), &segments);

            assert_eq!(trail.len(), n + 1);
            for (index, item) in trail.items.iter().enumerate() {
                assert_eq!(item.position, index + 1);
                assert_eq!(item.is_link, index < n);
            }
        }
    }

    #[test]
    fn test_last_item_unlinked_even_with_path() {
        let trail = compose_breadcrumbs(&site(), &[BreadcrumbSegment::new("Tools", "/tools")]);

        assert_eq!(trail.items[1].path, "/tools");
        assert!(!trail.items[1].is_link);
    }

    #[test]
    fn test_json_ld_contains_list_items() {
        let trail = compose_breadcrumbs(&site(), &[BreadcrumbSegment::new("FAQ", "/faq")]);
        let json: serde_json::Value = serde_json::from_str(&trail.json_ld()).unwrap();

        assert_eq!(json["@type"], "BreadcrumbList");
        assert_eq!(
            json["itemListElement"][1]["item"],
            "https://www.payraisecalculator.com/faq"
        );
    }
}
