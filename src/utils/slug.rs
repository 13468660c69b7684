//! URL slug validation.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase words separated by single hyphens.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

const MAX_SLUG_LENGTH: usize = 100;

/// Returns true if `slug` is a well-formed content slug.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LENGTH && SLUG_REGEX.is_match(slug)
}
