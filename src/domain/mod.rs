//! Domain layer containing the site model and its pure logic.
//!
//! # Architecture
//!
//! - [`entities`] - Site identity, page metadata and catalog content
//! - [`repositories`] - Content access trait definitions
//! - [`seo`] - Structured data, document head, breadcrumbs and sitemap
//! - [`calculators`] - Salary arithmetic over static lookup tables
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Every composer receives the [`entities::SiteIdentity`] explicitly
//! - Calculators and composers are pure functions with no shared state

pub mod calculators;
pub mod entities;
pub mod repositories;
pub mod seo;
