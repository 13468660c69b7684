//! Hourly wage and annual salary conversion.

use serde::Serialize;

use super::error::{CalculatorResult, ensure_non_negative, ensure_range, ensure_results};

/// Working days assumed per week for the daily figure.
const DAYS_PER_WEEK: f64 = 5.0;

/// Hours and weeks worked, the two divisors of every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkSchedule {
    pub hours_per_week: f64,
    pub weeks_per_year: f64,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self {
            hours_per_week: 40.0,
            weeks_per_year: 52.0,
        }
    }
}

impl WorkSchedule {
    pub fn new(hours_per_week: f64, weeks_per_year: f64) -> Self {
        Self {
            hours_per_week,
            weeks_per_year,
        }
    }

    fn validate(&self) -> CalculatorResult<()> {
        ensure_range("hours_per_week", self.hours_per_week, 0.0, 168.0, true)?;
        ensure_range("weeks_per_year", self.weeks_per_year, 0.0, 52.0, true)?;
        Ok(())
    }

    pub fn hours_per_year(&self) -> f64 {
        self.hours_per_week * self.weeks_per_year
    }
}

/// The same pay expressed over every common period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayBreakdown {
    pub hourly: f64,
    pub daily: f64,
    pub weekly: f64,
    pub biweekly: f64,
    pub semi_monthly: f64,
    pub monthly: f64,
    pub annual: f64,
    pub schedule: WorkSchedule,
}

impl PayBreakdown {
    fn from_rates(hourly: f64, annual: f64, schedule: WorkSchedule) -> CalculatorResult<Self> {
        let weekly = hourly * schedule.hours_per_week;
        let biweekly = weekly * 2.0;
        ensure_results(&[("hourly", hourly), ("annual", annual), ("biweekly", biweekly)])?;

        Ok(Self {
            hourly,
            daily: weekly / DAYS_PER_WEEK,
            weekly,
            biweekly,
            semi_monthly: annual / 24.0,
            monthly: annual / 12.0,
            annual,
            schedule,
        })
    }
}

/// `annual = hourly * hours_per_week * weeks_per_year`.
///
/// # Errors
///
/// Rejects a negative wage, non-positive hours or weeks, more than 168
/// hours a week and more than 52 weeks a year.
pub fn hourly_to_annual(hourly: f64, schedule: WorkSchedule) -> CalculatorResult<PayBreakdown> {
    let hourly = ensure_non_negative("hourly_rate", hourly)?;
    schedule.validate()?;

    let annual = hourly * schedule.hours_per_year();
    PayBreakdown::from_rates(hourly, annual, schedule)
}

/// `hourly = annual / (hours_per_week * weeks_per_year)`.
///
/// # Errors
///
/// Same rules as [`hourly_to_annual`].
pub fn annual_to_hourly(annual: f64, schedule: WorkSchedule) -> CalculatorResult<PayBreakdown> {
    let annual = ensure_non_negative("annual_salary", annual)?;
    schedule.validate()?;

    let hourly = annual / schedule.hours_per_year();
    PayBreakdown::from_rates(hourly, annual, schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculators::CalculatorError;

    #[test]
    fn test_hourly_to_annual_default_schedule() {
        let pay = hourly_to_annual(25.0, WorkSchedule::default()).unwrap();

        assert_eq!(pay.annual, 52_000.0);
        assert_eq!(pay.weekly, 1_000.0);
        assert_eq!(pay.daily, 200.0);
        assert_eq!(pay.biweekly, 2_000.0);
        assert!((pay.monthly - 4_333.333_333).abs() < 1e-3);
        assert!((pay.semi_monthly - 2_166.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_annual_to_hourly() {
        let pay = annual_to_hourly(62_400.0, WorkSchedule::default()).unwrap();
        assert!((pay.hourly - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_returns_original_rate() {
        for (rate, hours, weeks) in [(17.35, 40.0, 52.0), (42.1, 37.5, 48.0), (9.99, 20.0, 50.0)] {
            let schedule = WorkSchedule::new(hours, weeks);
            let annual = hourly_to_annual(rate, schedule).unwrap().annual;
            let back = annual_to_hourly(annual, schedule).unwrap().hourly;

            assert!((back - rate).abs() < 1e-9, "{rate} came back as {back}");
        }
    }

    #[test]
    fn test_zero_hours_rejected() {
        assert!(matches!(
            hourly_to_annual(20.0, WorkSchedule::new(0.0, 52.0)),
            Err(CalculatorError::OutOfRange { field: "hours_per_week", .. })
        ));
    }

    #[test]
    fn test_too_many_weeks_rejected() {
        assert!(annual_to_hourly(50_000.0, WorkSchedule::new(40.0, 53.0)).is_err());
    }

    #[test]
    fn test_negative_wage_rejected() {
        assert_eq!(
            hourly_to_annual(-5.0, WorkSchedule::default()).unwrap_err(),
            CalculatorError::Negative { field: "hourly_rate" }
        );
    }

    #[test]
    fn test_hourly_overflow_is_rejected() {
        let err = hourly_to_annual(1e308, WorkSchedule::default()).unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { field: "annual" });

        let err = annual_to_hourly(1e300, WorkSchedule::new(1e-300, 1e-300)).unwrap_err();
        assert_eq!(err, CalculatorError::Overflow { field: "hourly" });
    }
}
