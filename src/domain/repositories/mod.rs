//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for content access; implementations live in
//! `crate::infrastructure::content`. Mock implementations are generated via
//! `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ContentRepository`] - Articles, guides, tools and FAQs

pub mod content_repository;

pub use content_repository::ContentRepository;

#[cfg(test)]
pub use content_repository::MockContentRepository;
