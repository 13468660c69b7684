//! Utility functions shared across layers.
//!
//! - [`format`] - Currency and percentage formatting
//! - [`parse`] - Lenient number parsing for form input
//! - [`slug`] - Content slug validation

pub mod format;
pub mod parse;
pub mod slug;
