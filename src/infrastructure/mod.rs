//! Infrastructure layer implementing domain interfaces.
//!
//! # Modules
//!
//! - [`content`] - Content repository implementations
pub mod content;
