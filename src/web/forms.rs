//! Calculator forms rendered on tool pages.
//!
//! Forms submit with `GET`, so the query string is the whole form state and
//! every submission recomputes from scratch. Blank or non-numeric entries
//! count as zero; when the calculator rejects the resulting input the
//! error message is shown instead of results.

use std::collections::HashMap;

use crate::domain::calculators::cost_of_living::{CITIES, compare_cities};
use crate::domain::calculators::hourly::{
    PayBreakdown, WorkSchedule, annual_to_hourly, hourly_to_annual,
};
use crate::domain::calculators::inflation::{InflationInput, calculate_inflation};
use crate::domain::calculators::promotion::{PromotionLevel, calculate_promotion};
use crate::domain::calculators::raise::{
    INDUSTRIES, RaiseInput, calculate_raise, compare_to_industry, find_industry,
};
use crate::domain::calculators::total_compensation::{
    CompensationPackage, calculate_total_compensation,
};
use crate::domain::calculators::{CalculatorKind, CalculatorResult};
use crate::utils::format::{format_currency, format_currency_whole, format_percent, format_points};
use crate::utils::parse::{parse_number, parse_number_or_zero};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One input of a calculator form; a select when `options` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub step: &'static str,
    pub options: Vec<SelectOption>,
}

impl FormField {
    fn number(name: &'static str, label: &'static str, step: &'static str, query: &Query, default: &str) -> Self {
        Self {
            name,
            label,
            value: query.raw(name).unwrap_or(default).to_string(),
            step,
            options: Vec::new(),
        }
    }

    fn select<'a>(
        name: &'static str,
        label: &'static str,
        query: &Query,
        default: &str,
        choices: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let current = query.raw(name).unwrap_or(default).to_string();
        let options = choices
            .into_iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
                selected: value == current,
            })
            .collect();

        Self {
            name,
            label,
            value: current,
            step: "",
            options,
        }
    }

    pub fn is_select(&self) -> bool {
        !self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

impl ResultRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Render model of a calculator form and its latest results.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    pub kind: CalculatorKind,
    pub fields: Vec<FormField>,
    pub results: Vec<ResultRow>,
    pub error: Option<String>,
    pub submitted: bool,
}

/// Raw query parameters of a form submission.
struct Query<'a>(&'a HashMap<String, String>);

impl Query<'_> {
    fn raw(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn number(&self, name: &str) -> f64 {
        self.raw(name).map(parse_number_or_zero).unwrap_or(0.0)
    }

    fn number_or(&self, name: &str, default: f64) -> f64 {
        self.raw(name).map(parse_number_or_zero).unwrap_or(default)
    }

    fn text<'b>(&'b self, name: &str, default: &'b str) -> &'b str {
        self.raw(name).unwrap_or(default)
    }
}

/// Builds the form for `kind`, computing results when `params` holds a
/// submission.
pub fn build_form(kind: CalculatorKind, params: &HashMap<String, String>) -> CalculatorForm {
    let query = Query(params);
    let fields = fields(kind, &query);
    let submitted = fields.iter().any(|field| params.contains_key(field.name));

    let (results, error) = if submitted {
        match results(kind, &query) {
            Ok(rows) => (rows, None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        }
    } else {
        (Vec::new(), None)
    };

    CalculatorForm {
        kind,
        fields,
        results,
        error,
        submitted,
    }
}

fn fields(kind: CalculatorKind, q: &Query) -> Vec<FormField> {
    match kind {
        CalculatorKind::Raise => vec![
            FormField::number("current_salary", "Current salary ($)", "100", q, ""),
            FormField::number("raise_percent", "Raise (%)", "0.1", q, ""),
            FormField::select(
                "industry",
                "Compare with industry",
                q,
                "",
                std::iter::once(("", "No comparison"))
                    .chain(INDUSTRIES.iter().map(|i| (i.slug, i.name))),
            ),
        ],
        CalculatorKind::Inflation => vec![
            FormField::number("current_salary", "Current salary ($)", "100", q, ""),
            FormField::number("raise_percent", "Raise (%)", "0.1", q, ""),
            FormField::number("inflation_rate", "Inflation rate (%)", "0.1", q, "3"),
            FormField::number("years", "Years", "1", q, "1"),
        ],
        CalculatorKind::Hourly => vec![
            FormField::number("amount", "Pay ($)", "0.01", q, ""),
            FormField::select(
                "direction",
                "Convert",
                q,
                "hourly",
                [("hourly", "Hourly wage to salary"), ("annual", "Annual salary to hourly")],
            ),
            FormField::number("hours_per_week", "Hours per week", "0.5", q, "40"),
            FormField::number("weeks_per_year", "Weeks per year", "1", q, "52"),
        ],
        CalculatorKind::CostOfLiving => vec![
            FormField::number("salary", "Current salary ($)", "100", q, ""),
            FormField::select(
                "from_city",
                "Current city",
                q,
                "national-average",
                CITIES.iter().map(|c| (c.slug, c.name)),
            ),
            FormField::select(
                "to_city",
                "New city",
                q,
                "new-york",
                CITIES.iter().map(|c| (c.slug, c.name)),
            ),
        ],
        CalculatorKind::Promotion => vec![
            FormField::number("current_salary", "Current salary ($)", "100", q, ""),
            FormField::select(
                "level",
                "Promotion",
                q,
                PromotionLevel::MidToSenior.slug(),
                PromotionLevel::ALL.iter().map(|l| (l.slug(), l.label())),
            ),
            FormField::number("offered_salary", "Offered salary ($, optional)", "100", q, ""),
        ],
        CalculatorKind::TotalCompensation => vec![
            FormField::number("base_salary", "Base salary ($)", "100", q, ""),
            FormField::number("annual_bonus", "Annual bonus ($)", "100", q, ""),
            FormField::number("equity_per_year", "Equity per year ($)", "100", q, ""),
            FormField::number("retirement_match_percent", "Retirement match (%)", "0.5", q, ""),
            FormField::number("benefits_value", "Benefits value ($)", "100", q, ""),
            FormField::number("other_compensation", "Other compensation ($)", "100", q, ""),
        ],
    }
}

fn results(kind: CalculatorKind, q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    match kind {
        CalculatorKind::Raise => raise_rows(q),
        CalculatorKind::Inflation => inflation_rows(q),
        CalculatorKind::Hourly => hourly_rows(q),
        CalculatorKind::CostOfLiving => cost_of_living_rows(q),
        CalculatorKind::Promotion => promotion_rows(q),
        CalculatorKind::TotalCompensation => total_compensation_rows(q),
    }
}

fn raise_rows(q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    let result = calculate_raise(&RaiseInput {
        current_salary: q.number("current_salary"),
        raise_percent: q.number("raise_percent"),
    })?;

    let mut rows = vec![
        ResultRow::new("New salary", format_currency(result.new_salary)),
        ResultRow::new("Annual increase", format_currency(result.increase_amount)),
        ResultRow::new("Monthly increase", format_currency(result.monthly_increase)),
        ResultRow::new("New monthly pay", format_currency(result.new_monthly_salary)),
        ResultRow::new("New hourly rate", format_currency(result.new_hourly_rate)),
    ];

    let industry = q.text("industry", "");
    if !industry.is_empty() {
        let comparison = compare_to_industry(result.raise_percent, find_industry(industry)?);
        rows.push(ResultRow::new(
            format!("{} average raise", comparison.industry),
            format_percent(comparison.benchmark_percent, 1),
        ));
        rows.push(ResultRow::new(
            "Difference",
            format_points(comparison.difference_points),
        ));
        rows.push(ResultRow::new("Verdict", comparison.verdict.label()));
    }

    Ok(rows)
}

fn inflation_rows(q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    let years = q.number_or("years", 1.0).max(0.0).round() as u32;
    let result = calculate_inflation(&InflationInput {
        current_salary: q.number("current_salary"),
        raise_percent: q.number("raise_percent"),
        inflation_rate: q.number_or("inflation_rate", 3.0),
        years,
    })?;

    let change_label = if result.purchasing_power_change >= 0.0 {
        "Purchasing power gained"
    } else {
        "Purchasing power lost"
    };

    Ok(vec![
        ResultRow::new("New salary", format_currency(result.new_salary)),
        ResultRow::new("Real raise", format_percent(result.real_raise_percent, 2)),
        ResultRow::new(
            "Salary needed to keep pace",
            format_currency(result.salary_to_keep_pace),
        ),
        ResultRow::new(
            "New salary in today's dollars",
            format_currency(result.real_value_of_new_salary),
        ),
        ResultRow::new(
            change_label,
            format_currency(result.purchasing_power_change.abs()),
        ),
        ResultRow::new(
            "Beats inflation",
            if result.beats_inflation { "Yes" } else { "No" },
        ),
    ])
}

fn hourly_rows(q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    let schedule = WorkSchedule::new(
        q.number_or("hours_per_week", 40.0),
        q.number_or("weeks_per_year", 52.0),
    );
    let amount = q.number("amount");

    let breakdown: PayBreakdown = match q.text("direction", "hourly") {
        "annual" => annual_to_hourly(amount, schedule)?,
        _ => hourly_to_annual(amount, schedule)?,
    };

    Ok(vec![
        ResultRow::new("Hourly", format_currency(breakdown.hourly)),
        ResultRow::new("Daily", format_currency(breakdown.daily)),
        ResultRow::new("Weekly", format_currency(breakdown.weekly)),
        ResultRow::new("Bi-weekly", format_currency(breakdown.biweekly)),
        ResultRow::new("Semi-monthly", format_currency(breakdown.semi_monthly)),
        ResultRow::new("Monthly", format_currency(breakdown.monthly)),
        ResultRow::new("Annual", format_currency(breakdown.annual)),
    ])
}

fn cost_of_living_rows(q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    let result = compare_cities(
        q.number("salary"),
        q.text("from_city", "national-average"),
        q.text("to_city", "new-york"),
    )?;

    Ok(vec![
        ResultRow::new("Equivalent salary", format_currency_whole(result.equivalent_salary)),
        ResultRow::new("Difference", format_currency_whole(result.difference)),
        ResultRow::new("Change", format_percent(result.percent_difference, 1)),
        ResultRow::new(
            "Cost index",
            format!("{:.1} → {:.1}", result.from_index, result.to_index),
        ),
    ])
}

fn promotion_rows(q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    let level = PromotionLevel::from_slug(q.text("level", PromotionLevel::MidToSenior.slug()))?;
    // An empty offer means "no offer yet", not an offer of zero.
    let offered = q.raw("offered_salary").and_then(parse_number);
    let result = calculate_promotion(q.number("current_salary"), level, offered)?;

    let mut rows = vec![
        ResultRow::new(
            "Typical raise",
            format!(
                "{} ({})",
                format_percent(result.band.typical_percent, 0),
                format_currency_whole(result.typical_salary)
            ),
        ),
        ResultRow::new(
            "Range",
            format!(
                "{} - {}",
                format_currency_whole(result.low_salary),
                format_currency_whole(result.high_salary)
            ),
        ),
    ];

    if let Some(offer) = &result.offer {
        rows.push(ResultRow::new("Offer raise", format_percent(offer.raise_percent, 1)));
        rows.push(ResultRow::new("Offer is", offer.position.label()));
    }

    Ok(rows)
}

fn total_compensation_rows(q: &Query) -> CalculatorResult<Vec<ResultRow>> {
    let summary = calculate_total_compensation(&CompensationPackage {
        base_salary: q.number("base_salary"),
        annual_bonus: q.number("annual_bonus"),
        equity_per_year: q.number("equity_per_year"),
        retirement_match_percent: q.number("retirement_match_percent"),
        benefits_value: q.number("benefits_value"),
        other_compensation: q.number("other_compensation"),
    })?;

    Ok(vec![
        ResultRow::new("Total compensation", format_currency(summary.total)),
        ResultRow::new("Monthly", format_currency(summary.monthly_total)),
        ResultRow::new("Retirement match", format_currency(summary.retirement_match)),
        ResultRow::new("Base salary share", format_percent(summary.base_share_percent, 1)),
    ])
}
