//! Salary calculators.
//!
//! Each calculator is a closed-form transform over plain numeric input and,
//! where needed, a static lookup table. Calculators never call each other
//! and keep no state between calls.
//!
//! - [`raise`] - percentage raise, reverse raise and industry benchmarks
//! - [`inflation`] - real raise and purchasing power over time
//! - [`hourly`] - hourly / annual pay conversion
//! - [`cost_of_living`] - city cost-of-living comparison
//! - [`promotion`] - promotion-level raise bands
//! - [`total_compensation`] - total compensation summation

pub mod cost_of_living;
pub mod error;
pub mod hourly;
pub mod inflation;
pub mod promotion;
pub mod raise;
pub mod total_compensation;

pub use error::{CalculatorError, CalculatorResult};

use serde::Serialize;

/// Calculator backing a tool page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Raise,
    Inflation,
    Hourly,
    CostOfLiving,
    Promotion,
    TotalCompensation,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 6] = [
        Self::Raise,
        Self::Inflation,
        Self::Hourly,
        Self::CostOfLiving,
        Self::Promotion,
        Self::TotalCompensation,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::Inflation => "inflation",
            Self::Hourly => "hourly",
            Self::CostOfLiving => "cost-of-living",
            Self::Promotion => "promotion",
            Self::TotalCompensation => "total-compensation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Raise => "Pay raise",
            Self::Inflation => "Inflation-adjusted raise",
            Self::Hourly => "Hourly to salary",
            Self::CostOfLiving => "Cost of living",
            Self::Promotion => "Promotion raise",
            Self::TotalCompensation => "Total compensation",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_slug_round_trip() {
        for kind in CalculatorKind::ALL {
            assert_eq!(CalculatorKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(CalculatorKind::from_slug("mortgage"), None);
    }

    #[test]
    fn test_kind_serializes_as_slug() {
        let json = serde_json::to_value(CalculatorKind::CostOfLiving).unwrap();
        assert_eq!(json, "cost-of-living");
    }
}
