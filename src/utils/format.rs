//! Currency and percentage formatting shared by every calculator view.

/// Formats an amount as US dollars with cents, e.g. `$1,234.56`.
///
/// Negative amounts keep the sign before the symbol: `-$12.00`.
pub fn format_currency(amount: f64) -> String {
    format_money(amount, 2)
}

/// Formats an amount as whole US dollars, e.g. `$52,000`.
pub fn format_currency_whole(amount: f64) -> String {
    format_money(amount, 0)
}

/// Formats a percentage with a fixed number of decimals, e.g. `5.00%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    let value = normalize_zero(value, decimals);
    format!("{value:.decimals$}%")
}

/// Percentage-point difference with an explicit sign, e.g. `+1.20 pts`.
pub fn format_points(value: f64) -> String {
    let value = normalize_zero(value, 2);
    format!("{value:+.2} pts")
}

fn format_money(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let amount = normalize_zero(amount, decimals);
    let formatted = format!("{:.decimals$}", amount.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + 4);
    if amount < 0.0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Values that round to zero print without a minus sign.
fn normalize_zero(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    if (value * scale).round() == 0.0 { 0.0 } else { value }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(1234.567), "$1,234.57");
        assert_eq!(format_currency(52_500.0), "$52,500.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(-1500.25), "-$1,500.25");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_whole() {
        assert_eq!(format_currency_whole(52_000.0), "$52,000");
        assert_eq!(format_currency_whole(999.6), "$1,000");
        assert_eq!(format_currency_whole(123.0), "$123");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(5.0, 2), "5.00%");
        assert_eq!(format_percent(1.941_747, 1), "1.9%");
        assert_eq!(format_percent(-0.0001, 2), "0.00%");
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(1.2), "+1.20 pts");
        assert_eq!(format_points(-0.75), "-0.75 pts");
    }
}
