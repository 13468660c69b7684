//! Percentage raise calculator with industry benchmarks.

use serde::Serialize;

use super::error::{
    CalculatorError, CalculatorResult, ensure_non_negative, ensure_positive, ensure_rate,
    ensure_results,
};

/// Paid hours in a standard full-time year (40 h x 52 weeks).
pub const HOURS_PER_YEAR: f64 = 2080.0;

/// Points either side of the benchmark still counted as in line with it.
const BENCHMARK_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaiseInput {
    pub current_salary: f64,
    pub raise_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaiseResult {
    pub current_salary: f64,
    pub raise_percent: f64,
    pub new_salary: f64,
    pub increase_amount: f64,
    pub monthly_increase: f64,
    pub new_monthly_salary: f64,
    pub new_hourly_rate: f64,
}

/// Applies a percentage raise: `new = current * (1 + pct / 100)`.
///
/// # Errors
///
/// Rejects a negative salary and raises at or below -100%.
pub fn calculate_raise(input: &RaiseInput) -> CalculatorResult<RaiseResult> {
    let current = ensure_non_negative("current_salary", input.current_salary)?;
    let percent = ensure_rate("raise_percent", input.raise_percent)?;

    let new_salary = current * (1.0 + percent / 100.0);
    let increase_amount = new_salary - current;
    ensure_results(&[("new_salary", new_salary)])?;

    Ok(RaiseResult {
        current_salary: current,
        raise_percent: percent,
        new_salary,
        increase_amount,
        monthly_increase: increase_amount / 12.0,
        new_monthly_salary: new_salary / 12.0,
        new_hourly_rate: new_salary / HOURS_PER_YEAR,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaisePercentageResult {
    pub old_salary: f64,
    pub new_salary: f64,
    pub raise_percent: f64,
    pub increase_amount: f64,
}

/// Works out the raise percentage between two salaries.
///
/// # Errors
///
/// The old salary is the denominator and must be greater than zero.
pub fn raise_percentage(old_salary: f64, new_salary: f64) -> CalculatorResult<RaisePercentageResult> {
    let old_salary = ensure_positive("old_salary", old_salary)?;
    let new_salary = ensure_non_negative("new_salary", new_salary)?;
    let increase_amount = new_salary - old_salary;
    let raise_percent = increase_amount / old_salary * 100.0;
    ensure_results(&[("raise_percent", raise_percent)])?;

    Ok(RaisePercentageResult {
        old_salary,
        new_salary,
        raise_percent,
        increase_amount,
    })
}

/// Average annual raise observed in an industry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub average_raise_percent: f64,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry { slug: "technology", name: "Technology", average_raise_percent: 4.8 },
    Industry { slug: "finance", name: "Finance & Insurance", average_raise_percent: 4.4 },
    Industry { slug: "engineering", name: "Engineering", average_raise_percent: 4.2 },
    Industry { slug: "healthcare", name: "Healthcare", average_raise_percent: 3.9 },
    Industry { slug: "manufacturing", name: "Manufacturing", average_raise_percent: 3.6 },
    Industry { slug: "hospitality", name: "Hospitality", average_raise_percent: 3.4 },
    Industry { slug: "retail", name: "Retail", average_raise_percent: 3.2 },
    Industry { slug: "nonprofit", name: "Nonprofit", average_raise_percent: 3.1 },
    Industry { slug: "education", name: "Education", average_raise_percent: 3.0 },
    Industry { slug: "government", name: "Government", average_raise_percent: 2.9 },
];

pub fn find_industry(slug: &str) -> CalculatorResult<&'static Industry> {
    INDUSTRIES
        .iter()
        .find(|industry| industry.slug == slug)
        .ok_or_else(|| CalculatorError::UnknownIndustry(slug.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkVerdict {
    AboveAverage,
    Average,
    BelowAverage,
}

impl BenchmarkVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AboveAverage => "Above the industry average",
            Self::Average => "In line with the industry average",
            Self::BelowAverage => "Below the industry average",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryComparison {
    pub industry: &'static str,
    pub benchmark_percent: f64,
    /// Raise minus benchmark, in percentage points.
    pub difference_points: f64,
    pub verdict: BenchmarkVerdict,
}

/// Compares a raise against an industry's average annual raise.
pub fn compare_to_industry(raise_percent: f64, industry: &Industry) -> IndustryComparison {
    let difference_points = raise_percent - industry.average_raise_percent;
    let verdict = if difference_points > BENCHMARK_TOLERANCE {
        BenchmarkVerdict::AboveAverage
    } else if difference_points < -BENCHMARK_TOLERANCE {
        BenchmarkVerdict::BelowAverage
    } else {
        BenchmarkVerdict::Average
    };

    IndustryComparison {
        industry: industry.name,
        benchmark_percent: industry.average_raise_percent,
        difference_points,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_five_percent_raise() {
        let result = calculate_raise(&RaiseInput {
            current_salary: 50_000.0,
            raise_percent: 5.0,
        })
        .unwrap();

        assert!((result.new_salary - 52_500.0).abs() < EPS);
        assert!((result.increase_amount - 2_500.0).abs() < EPS);
        assert!((result.monthly_increase - 208.333_333_333).abs() < 1e-6);
        assert!((result.new_monthly_salary - 4_375.0).abs() < EPS);
        assert!((result.new_hourly_rate - 52_500.0 / 2080.0).abs() < EPS);
    }

    #[test]
    fn test_zero_salary_yields_zero() {
        let result = calculate_raise(&RaiseInput {
            current_salary: 0.0,
            raise_percent: 10.0,
        })
        .unwrap();
        assert_eq!(result.new_salary, 0.0);
    }

    #[test]
    fn test_pay_cut_is_allowed() {
        let result = calculate_raise(&RaiseInput {
            current_salary: 40_000.0,
            raise_percent: -10.0,
        })
        .unwrap();
        assert!((result.new_salary - 36_000.0).abs() < EPS);
        assert!(result.increase_amount < 0.0);
    }

    #[test]
    fn test_negative_salary_rejected() {
        let err = calculate_raise(&RaiseInput {
            current_salary: -1.0,
            raise_percent: 3.0,
        })
        .unwrap_err();
        assert_eq!(err, CalculatorError::Negative { field: "current_salary" });
    }

    #[test]
    fn test_raise_percentage() {
        let result = raise_percentage(60_000.0, 63_000.0).unwrap();
        assert!((result.raise_percent - 5.0).abs() < EPS);
        assert!((result.increase_amount - 3_000.0).abs() < EPS);
    }

    #[test]
    fn test_raise_percentage_zero_denominator() {
        assert_eq!(
            raise_percentage(0.0, 10.0).unwrap_err(),
            CalculatorError::NotPositive { field: "old_salary" }
        );
    }

    #[test]
    fn test_compare_to_industry() {
        let tech = find_industry("technology").unwrap();

        assert_eq!(compare_to_industry(6.0, tech).verdict, BenchmarkVerdict::AboveAverage);
        assert_eq!(compare_to_industry(4.5, tech).verdict, BenchmarkVerdict::Average);
        assert_eq!(compare_to_industry(2.0, tech).verdict, BenchmarkVerdict::BelowAverage);
        assert!((compare_to_industry(6.0, tech).difference_points - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_industry() {
        assert!(matches!(
            find_industry("piracy"),
            Err(CalculatorError::UnknownIndustry(_))
        ));
    }

    #[test]
    fn test_raise_overflow_is_rejected() {
        let err = calculate_raise(&RaiseInput {
            current_salary: 1e308,
            raise_percent: 900.0,
        })
        .unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { field: "new_salary" });
    }

    #[test]
    fn test_raise_percentage_overflow_is_rejected() {
        let err = raise_percentage(1e-300, 1e300).unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { field: "raise_percent" });
    }
}
