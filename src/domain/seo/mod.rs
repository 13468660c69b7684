//! Search-engine metadata composition.
//!
//! - [`schema`] - schema.org structured-data records and builders
//! - [`head`] - document title, canonical URL and social metadata
//! - [`breadcrumbs`] - Home-rooted navigational trails
//! - [`sitemap`] - `sitemap.xml` and `robots.txt` rendering
//!
//! All functions are pure and receive the [`SiteIdentity`] explicitly.
//!
//! [`SiteIdentity`]: crate::domain::entities::SiteIdentity

pub mod breadcrumbs;
pub mod head;
pub mod schema;
pub mod sitemap;

pub use breadcrumbs::{BreadcrumbItem, BreadcrumbTrail, compose_breadcrumbs};
pub use head::{HeadModel, compose_head, compose_title};
pub use schema::StructuredData;
pub use sitemap::{SitemapEntry, render_robots, render_sitemap};
