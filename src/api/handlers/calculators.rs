//! Handlers for the JSON calculator endpoints.
//!
//! Every handler validates the request DTO first, then runs the domain
//! calculator; domain errors surface as `400 Bad Request` as well.

use axum::Json;
use validator::Validate;

use crate::api::dto::calculators::{
    CalculationResponse, CostOfLivingRequest, CostOfLivingResponse, HourlyRequest,
    InflationRequest, InflationResponse, PayBreakdownResponse, PromotionRequest,
    PromotionResponse, RaisePercentageRequest, RaisePercentageResponse, RaiseRequest,
    RaiseResponse, SalaryRequest, ScheduleParams, TotalCompensationRequest,
    TotalCompensationResponse,
};
use crate::domain::calculators::cost_of_living::{compare_cities, compare_indices};
use crate::domain::calculators::hourly::{WorkSchedule, annual_to_hourly, hourly_to_annual};
use crate::domain::calculators::inflation::{InflationInput, calculate_inflation};
use crate::domain::calculators::promotion::{PromotionLevel, calculate_promotion};
use crate::domain::calculators::raise::{
    RaiseInput, calculate_raise, compare_to_industry, find_industry, raise_percentage,
};
use crate::domain::calculators::total_compensation::{
    CompensationPackage, calculate_total_compensation,
};
use crate::error::AppError;

type CalculatorReply<T> = Result<Json<CalculationResponse<T>>, AppError>;

fn record(calculator: &'static str) {
    metrics::counter!("calculator_requests_total", "calculator" => calculator).increment(1);
    tracing::debug!(calculator, "Calculation requested");
}

fn reply<T: serde::Serialize>(calculator: &'static str, result: T) -> CalculatorReply<T> {
    Ok(Json(CalculationResponse::new(calculator, result)))
}

/// Applies a percentage raise, optionally benchmarked against an industry.
///
/// # Endpoint
///
/// `POST /api/calculators/raise`
///
/// # Request Body
///
/// ```json
/// { "current_salary": 50000, "raise_percent": 5, "industry": "technology" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "calculator": "raise",
///   "result": {
///     "current_salary": 50000.0,
///     "raise_percent": 5.0,
///     "new_salary": 52500.0,
///     "increase_amount": 2500.0,
///     "...": "...",
///     "industry_comparison": { "benchmark_percent": 4.8, "verdict": "average" }
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid numbers or an unknown industry.
pub async fn raise_handler(Json(payload): Json<RaiseRequest>) -> CalculatorReply<RaiseResponse> {
    payload.validate()?;
    record("raise");

    let raise = calculate_raise(&RaiseInput {
        current_salary: payload.current_salary,
        raise_percent: payload.raise_percent,
    })?;

    let industry_comparison = match payload.industry.as_deref() {
        Some(slug) => Some(compare_to_industry(raise.raise_percent, find_industry(slug)?)),
        None => None,
    };

    reply(
        "raise",
        RaiseResponse {
            raise,
            industry_comparison,
        },
    )
}

/// Computes the raise percentage between an old and a new salary.
///
/// `POST /api/calculators/raise-percentage`
pub async fn raise_percentage_handler(
    Json(payload): Json<RaisePercentageRequest>,
) -> CalculatorReply<RaisePercentageResponse> {
    payload.validate()?;
    record("raise-percentage");

    reply(
        "raise-percentage",
        raise_percentage(payload.old_salary, payload.new_salary)?,
    )
}

/// Adjusts a raise for inflation over one or more years.
///
/// `POST /api/calculators/inflation`
pub async fn inflation_handler(
    Json(payload): Json<InflationRequest>,
) -> CalculatorReply<InflationResponse> {
    payload.validate()?;
    record("inflation");

    let result = calculate_inflation(&InflationInput {
        current_salary: payload.current_salary,
        raise_percent: payload.raise_percent,
        inflation_rate: payload.inflation_rate,
        years: payload.years,
    })?;

    reply("inflation", result)
}

/// Converts an hourly wage into every pay period.
///
/// `POST /api/calculators/hourly`
pub async fn hourly_handler(Json(payload): Json<HourlyRequest>) -> CalculatorReply<PayBreakdownResponse> {
    payload.validate()?;
    record("hourly");

    reply(
        "hourly",
        hourly_to_annual(payload.hourly_rate, schedule(&payload.schedule))?,
    )
}

/// Converts an annual salary into every pay period.
///
/// `POST /api/calculators/salary`
pub async fn salary_handler(Json(payload): Json<SalaryRequest>) -> CalculatorReply<PayBreakdownResponse> {
    payload.validate()?;
    record("salary");

    reply(
        "salary",
        annual_to_hourly(payload.annual_salary, schedule(&payload.schedule))?,
    )
}

fn schedule(params: &ScheduleParams) -> WorkSchedule {
    let default = WorkSchedule::default();
    WorkSchedule::new(
        params.hours_per_week.unwrap_or(default.hours_per_week),
        params.weeks_per_year.unwrap_or(default.weeks_per_year),
    )
}

/// Finds the equivalent salary in another city.
///
/// # Endpoint
///
/// `POST /api/calculators/cost-of-living`
///
/// Accepts either city slugs (`from_city`, `to_city`) or raw indices
/// (`from_index`, `to_index`, national average = 100).
///
/// # Errors
///
/// Returns 400 Bad Request when neither pair is complete or a city is unknown.
pub async fn cost_of_living_handler(
    Json(payload): Json<CostOfLivingRequest>,
) -> CalculatorReply<CostOfLivingResponse> {
    payload.validate()?;
    record("cost-of-living");

    let result = match (
        payload.from_city.as_deref(),
        payload.to_city.as_deref(),
        payload.from_index,
        payload.to_index,
    ) {
        (Some(from), Some(to), _, _) => compare_cities(payload.salary, from, to)?,
        (_, _, Some(from), Some(to)) => compare_indices(payload.salary, from, to)?,
        _ => {
            return Err(AppError::bad_request(
                "Provide from_city and to_city, or from_index and to_index",
                serde_json::json!({ "fields": ["from_city", "to_city", "from_index", "to_index"] }),
            ));
        }
    };

    reply("cost-of-living", result)
}

/// Projects the raise range for a promotion level.
///
/// `POST /api/calculators/promotion`
pub async fn promotion_handler(
    Json(payload): Json<PromotionRequest>,
) -> CalculatorReply<PromotionResponse> {
    payload.validate()?;
    record("promotion");

    let level = PromotionLevel::from_slug(&payload.level)?;
    reply(
        "promotion",
        calculate_promotion(payload.current_salary, level, payload.offered_salary)?,
    )
}

/// Sums a compensation package.
///
/// `POST /api/calculators/total-compensation`
pub async fn total_compensation_handler(
    Json(payload): Json<TotalCompensationRequest>,
) -> CalculatorReply<TotalCompensationResponse> {
    payload.validate()?;
    record("total-compensation");

    let package = CompensationPackage {
        base_salary: payload.base_salary,
        annual_bonus: payload.annual_bonus,
        equity_per_year: payload.equity_per_year,
        retirement_match_percent: payload.retirement_match_percent,
        benefits_value: payload.benefits_value,
        other_compensation: payload.other_compensation,
    };

    reply("total-compensation", calculate_total_compensation(&package)?)
}
