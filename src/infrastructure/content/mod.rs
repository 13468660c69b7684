//! Content storage for articles, guides, tools and FAQs.
//!
//! - [`StaticContentRepository`] - catalog compiled into the binary

mod catalog;
mod static_repository;

pub use static_repository::StaticContentRepository;
