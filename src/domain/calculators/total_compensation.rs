//! Total compensation summation.

use serde::Serialize;

use super::error::{CalculatorResult, ensure_non_negative, ensure_range, ensure_results};

/// Annual components of a compensation package.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensationPackage {
    pub base_salary: f64,
    pub annual_bonus: f64,
    /// Equity value vesting per year.
    pub equity_per_year: f64,
    /// Employer retirement match as a percent of base salary.
    pub retirement_match_percent: f64,
    pub benefits_value: f64,
    pub other_compensation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompensationSummary {
    pub base_salary: f64,
    pub annual_bonus: f64,
    pub equity_per_year: f64,
    pub retirement_match: f64,
    pub benefits_value: f64,
    pub other_compensation: f64,
    pub total: f64,
    pub monthly_total: f64,
    /// Share of the total paid as base salary, in percent (0 when total is 0).
    pub base_share_percent: f64,
}

/// Sums every component; the retirement match is `base * match% / 100`.
///
/// # Errors
///
/// Rejects negative components and a match outside 0-100%.
pub fn calculate_total_compensation(package: &CompensationPackage) -> CalculatorResult<CompensationSummary> {
    let base = ensure_non_negative("base_salary", package.base_salary)?;
    let bonus = ensure_non_negative("annual_bonus", package.annual_bonus)?;
    let equity = ensure_non_negative("equity_per_year", package.equity_per_year)?;
    let match_percent = ensure_range(
        "retirement_match_percent",
        package.retirement_match_percent,
        0.0,
        100.0,
        false,
    )?;
    let benefits = ensure_non_negative("benefits_value", package.benefits_value)?;
    let other = ensure_non_negative("other_compensation", package.other_compensation)?;

    let retirement_match = base * match_percent / 100.0;
    let total = base + bonus + equity + retirement_match + benefits + other;
    ensure_results(&[("total", total)])?;
    let base_share_percent = if total > 0.0 { base / total * 100.0 } else { 0.0 };

    Ok(CompensationSummary {
        base_salary: base,
        annual_bonus: bonus,
        equity_per_year: equity,
        retirement_match,
        benefits_value: benefits,
        other_compensation: other,
        total,
        monthly_total: total / 12.0,
        base_share_percent,
    })
}
