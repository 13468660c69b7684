//! Lenient number parsing for HTML form input.

/// Parses user-entered text as a number, treating anything unparseable as 0.
///
/// Currency symbols, thousands separators, percent signs and surrounding
/// whitespace are ignored, so `"$52,000"` and `"4.5%"` parse as expected.
pub fn parse_number_or_zero(input: &str) -> f64 {
    parse_number(input).unwrap_or(0.0)
}

/// Strict variant returning `None` for blank or invalid input.
pub fn parse_number(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | ' ' | '_'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
