//! Server-rendered site pages.
//!
//! Each page supplies [`PageMetadata`](crate::domain::entities::PageMetadata)
//! and breadcrumb segments; the shared layout renders the composed head,
//! trail and JSON-LD. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`forms`] - Calculator form models
//! - [`handlers`] - Page handlers
//! - [`page`] - Per-request page context and error pages
//! - [`routes`] - Page route configuration
//! - [`structured_data`] - JSON-LD for catalog content

pub mod forms;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod structured_data;
