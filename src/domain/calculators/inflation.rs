//! Inflation-adjusted raise calculator.

use serde::Serialize;

use super::error::{CalculatorResult, ensure_non_negative, ensure_range, ensure_rate, ensure_results};

pub const MAX_YEARS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationInput {
    pub current_salary: f64,
    pub raise_percent: f64,
    /// Annual inflation rate in percent.
    pub inflation_rate: f64,
    /// Years the inflation compounds over; the raise is applied once.
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflationResult {
    pub new_salary: f64,
    /// Raise after inflation, in percent.
    pub real_raise_percent: f64,
    /// Cumulative price growth factor, `(1 + i)^years`.
    pub inflation_factor: f64,
    /// Salary needed after `years` to keep today's purchasing power.
    pub salary_to_keep_pace: f64,
    /// The raised salary expressed in today's money.
    pub real_value_of_new_salary: f64,
    /// Gain (positive) or loss in purchasing power, in today's money.
    pub purchasing_power_change: f64,
    pub beats_inflation: bool,
}

/// Adjusts a raise for inflation.
///
/// Real raise is `((1 + r) / (1 + i) - 1) * 100` for a single year; over
/// several years the price level compounds as `(1 + i)^years`.
pub fn calculate_inflation(input: &InflationInput) -> CalculatorResult<InflationResult> {
    let current = ensure_non_negative("current_salary", input.current_salary)?;
    let raise = ensure_rate("raise_percent", input.raise_percent)? / 100.0;
    let inflation = ensure_rate("inflation_rate", input.inflation_rate)? / 100.0;
    ensure_range("years", f64::from(input.years), 1.0, f64::from(MAX_YEARS), false)?;

    let new_salary = current * (1.0 + raise);
    let inflation_factor = (1.0 + inflation).powi(input.years as i32);
    let real_raise_percent = ((1.0 + raise) / inflation_factor - 1.0) * 100.0;
    let salary_to_keep_pace = current * inflation_factor;
    let real_value_of_new_salary = new_salary / inflation_factor;
    ensure_results(&[
        ("new_salary", new_salary),
        ("salary_to_keep_pace", salary_to_keep_pace),
        ("real_raise_percent", real_raise_percent),
        ("real_value_of_new_salary", real_value_of_new_salary),
    ])?;

    Ok(InflationResult {
        new_salary,
        real_raise_percent,
        inflation_factor,
        salary_to_keep_pace,
        real_value_of_new_salary,
        purchasing_power_change: real_value_of_new_salary - current,
        beats_inflation: new_salary >= salary_to_keep_pace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculators::CalculatorError;

    fn input(raise: f64, inflation: f64, years: u32) -> InflationInput {
        InflationInput {
            current_salary: 50_000.0,
            raise_percent: raise,
            inflation_rate: inflation,
            years,
        }
    }

    #[test]
    fn test_raise_equal_to_inflation_is_flat() {
        let result = calculate_inflation(&input(3.0, 3.0, 1)).unwrap();

        assert!(result.real_raise_percent.abs() < 1e-9);
        assert!((result.salary_to_keep_pace - 51_500.0).abs() < 1e-9);
        assert!(result.beats_inflation);
    }

    #[test]
    fn test_real_raise_formula() {
        let result = calculate_inflation(&input(5.0, 3.0, 1)).unwrap();
        let expected = (1.05 / 1.03 - 1.0) * 100.0;

        assert!((result.real_raise_percent - expected).abs() < 1e-9);
        assert!(result.purchasing_power_change > 0.0);
    }

    #[test]
    fn test_inflation_compounds_over_years() {
        let result = calculate_inflation(&input(4.0, 3.0, 3)).unwrap();

        assert!((result.inflation_factor - 1.03_f64.powi(3)).abs() < 1e-12);
        assert!(!result.beats_inflation);
        assert!(result.purchasing_power_change < 0.0);
    }

    #[test]
    fn test_zero_years_rejected() {
        assert!(matches!(
            calculate_inflation(&input(3.0, 2.0, 0)),
            Err(CalculatorError::OutOfRange { field: "years", .. })
        ));
    }

    #[test]
    fn test_deflation_of_minus_hundred_rejected() {
        assert!(calculate_inflation(&input(3.0, -100.0, 1)).is_err());
    }

    #[test]
    fn test_inflation_overflow_is_rejected() {
        let err = calculate_inflation(&InflationInput {
            current_salary: 1e308,
            raise_percent: 0.0,
            inflation_rate: 1000.0,
            years: 50,
        })
        .unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { field: "salary_to_keep_pace" });
    }
}
