//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::content_service::ContentService`] - Articles, guides, tools and sitemap entries

pub mod services;
