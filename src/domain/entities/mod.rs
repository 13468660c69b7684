//! Core domain entities representing the site data model.
//!
//! Entities are plain value records built fresh for each request and never
//! mutated after construction.
//!
//! # Entity Types
//!
//! - [`SiteIdentity`] - Brand, origin and organization defaults
//! - [`PageMetadata`] - Title, description and structured data of a page
//! - [`BreadcrumbSegment`] - One step of a navigational trail
//! - [`Article`], [`Guide`], [`Tool`], [`Faq`] - Catalog content

pub mod breadcrumb;
pub mod content;
pub mod page;
pub mod site;

pub use breadcrumb::BreadcrumbSegment;
pub use content::{Article, Faq, Guide, GuideStep, Section, Tool};
pub use page::{OpenGraphType, PageMetadata};
pub use site::SiteIdentity;
