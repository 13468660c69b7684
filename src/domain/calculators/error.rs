//! Calculator input errors.

/// Reasons a calculator rejects its input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} is too large to calculate")]
    Overflow { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("Unknown promotion level: {0}")]
    UnknownPromotionLevel(String),
}

impl CalculatorError {
    /// Input field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotFinite { field }
            | Self::Negative { field }
            | Self::NotPositive { field }
            | Self::Overflow { field }
            | Self::OutOfRange { field, .. } => Some(field),
            Self::UnknownCity(_) => Some("city"),
            Self::UnknownIndustry(_) => Some("industry"),
            Self::UnknownPromotionLevel(_) => Some("level"),
        }
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> CalculatorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::NotFinite { field })
    }
}

/// Money amounts: finite and `>= 0`.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> CalculatorResult<f64> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalculatorError::Negative { field });
    }
    Ok(value)
}

/// Denominators: finite and `> 0`.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> CalculatorResult<f64> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalculatorError::NotPositive { field });
    }
    Ok(value)
}

/// Closed-range check, with an open lower bound when `exclusive_min` is set.
pub(crate) fn ensure_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    exclusive_min: bool,
) -> CalculatorResult<f64> {
    ensure_finite(field, value)?;
    let below = if exclusive_min { value <= min } else { value < min };
    if below || value > max {
        return Err(CalculatorError::OutOfRange { field, min, max });
    }
    Ok(value)
}

/// Computed figures: finite inputs can still overflow to infinity.
pub(crate) fn ensure_results(values: &[(&'static str, f64)]) -> CalculatorResult<()> {
    match values.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(field, _)) => Err(CalculatorError::Overflow { field }),
        None => Ok(()),
    }
}

/// Percentage rates: above -100% (a rate of -100% or lower zeroes out pay)
/// and at most 1000%.
pub(crate) fn ensure_rate(field: &'static str, value: f64) -> CalculatorResult<f64> {
    ensure_range(field, value, -100.0, 1000.0, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("salary", 0.0), Ok(0.0));
        assert_eq!(
            ensure_non_negative("salary", -1.0),
            Err(CalculatorError::Negative { field: "salary" })
        );
        assert_eq!(
            ensure_non_negative("salary", f64::NAN),
            Err(CalculatorError::NotFinite { field: "salary" })
        );
    }

    #[test]
    fn test_ensure_positive_rejects_zero() {
        assert!(ensure_positive("hours", 0.0).is_err());
        assert!(ensure_positive("hours", 0.5).is_ok());
    }

    #[test]
    fn test_ensure_rate_bounds() {
        assert!(ensure_rate("rate", -100.0).is_err());
        assert!(ensure_rate("rate", -99.9).is_ok());
        assert!(ensure_rate("rate", 1000.0).is_ok());
        assert!(ensure_rate("rate", 1000.1).is_err());
    }

    #[test]
    fn test_ensure_results_names_first_overflow() {
        assert_eq!(ensure_results(&[("total", 1.0), ("monthly", 2.0)]), Ok(()));
        assert_eq!(
            ensure_results(&[("total", f64::INFINITY), ("monthly", f64::NAN)]),
            Err(CalculatorError::Overflow { field: "total" })
        );
    }

    #[test]
    fn test_error_field_and_message() {
        let err = CalculatorError::OutOfRange {
            field: "weeks_per_year",
            min: 0.0,
            max: 52.0,
        };
        assert_eq!(err.field(), Some("weeks_per_year"));
        assert_eq!(err.to_string(), "weeks_per_year must be between 0 and 52");
        assert_eq!(
            CalculatorError::UnknownCity("atlantis".to_string()).field(),
            Some("city")
        );
    }
}
