//! DTOs for the calculator endpoints.
//!
//! Numeric fields accept either JSON numbers or numeric strings
//! (`52000` or `"52000"`).

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::calculators::cost_of_living::CostOfLivingResult;
use crate::domain::calculators::hourly::PayBreakdown;
use crate::domain::calculators::inflation::InflationResult;
use crate::domain::calculators::promotion::PromotionResult;
use crate::domain::calculators::raise::{IndustryComparison, RaisePercentageResult, RaiseResult};
use crate::domain::calculators::total_compensation::CompensationSummary;

/// Envelope for every calculator response.
#[derive(Debug, Serialize)]
pub struct CalculationResponse<T: Serialize> {
    pub calculator: &'static str,
    pub result: T,
}

impl<T: Serialize> CalculationResponse<T> {
    pub fn new(calculator: &'static str, result: T) -> Self {
        Self { calculator, result }
    }
}

/// `POST /api/calculators/raise`
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RaiseRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0, message = "Salary cannot be negative"))]
    pub current_salary: f64,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(exclusive_min = -100.0, max = 1000.0))]
    pub raise_percent: f64,

    /// Optional industry slug to benchmark against.
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RaiseResponse {
    #[serde(flatten)]
    pub raise: RaiseResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_comparison: Option<IndustryComparison>,
}

/// `POST /api/calculators/raise-percentage`
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct RaisePercentageRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(exclusive_min = 0.0, message = "Old salary must be greater than zero"))]
    pub old_salary: f64,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub new_salary: f64,
}

pub type RaisePercentageResponse = RaisePercentageResult;

/// `POST /api/calculators/inflation`
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct InflationRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub current_salary: f64,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(exclusive_min = -100.0, max = 1000.0))]
    pub raise_percent: f64,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(exclusive_min = -100.0, max = 1000.0))]
    pub inflation_rate: f64,

    #[serde(default = "default_years")]
    #[validate(range(min = 1, max = 50))]
    pub years: u32,
}

fn default_years() -> u32 {
    1
}

pub type InflationResponse = InflationResult;

/// `POST /api/calculators/hourly` (hourly → annual).
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct HourlyRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub hourly_rate: f64,

    #[serde(flatten)]
    #[validate(nested)]
    pub schedule: ScheduleParams,
}

/// `POST /api/calculators/salary` (annual → hourly).
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct SalaryRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub annual_salary: f64,

    #[serde(flatten)]
    #[validate(nested)]
    pub schedule: ScheduleParams,
}

/// Work schedule; both fields default to a full-time year.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleParams {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(exclusive_min = 0.0, max = 168.0))]
    pub hours_per_week: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(exclusive_min = 0.0, max = 52.0))]
    pub weeks_per_year: Option<f64>,
}

pub type PayBreakdownResponse = PayBreakdown;

/// `POST /api/calculators/cost-of-living`
///
/// Either both city slugs or both indices must be supplied; cities win when
/// both are present.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CostOfLivingRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub salary: f64,

    pub from_city: Option<String>,
    pub to_city: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(exclusive_min = 0.0))]
    pub from_index: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(exclusive_min = 0.0))]
    pub to_index: Option<f64>,
}

pub type CostOfLivingResponse = CostOfLivingResult;

/// `POST /api/calculators/promotion`
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct PromotionRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub current_salary: f64,

    /// Promotion level slug, e.g. `mid-to-senior`.
    #[validate(length(min = 1, max = 50))]
    pub level: String,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[validate(range(min = 0.0))]
    pub offered_salary: Option<f64>,
}

pub type PromotionResponse = PromotionResult;

/// `POST /api/calculators/total-compensation`
///
/// Every component except the base salary defaults to zero.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct TotalCompensationRequest {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub base_salary: f64,

    #[serde(default)]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub annual_bonus: f64,

    #[serde(default)]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub equity_per_year: f64,

    #[serde(default)]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub retirement_match_percent: f64,

    #[serde(default)]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub benefits_value: f64,

    #[serde(default)]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 0.0))]
    pub other_compensation: f64,
}

pub type TotalCompensationResponse = CompensationSummary;
