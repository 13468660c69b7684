//! Cost-of-living comparison between cities.

use serde::Serialize;

use super::error::{
    CalculatorError, CalculatorResult, ensure_non_negative, ensure_positive, ensure_results,
};

/// Composite cost index of a city, national average = 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub slug: &'static str,
    pub name: &'static str,
    pub index: f64,
}

pub const NATIONAL_AVERAGE_INDEX: f64 = 100.0;

pub const CITIES: &[City] = &[
    City { slug: "new-york", name: "New York, NY", index: 187.2 },
    City { slug: "san-francisco", name: "San Francisco, CA", index: 178.6 },
    City { slug: "boston", name: "Boston, MA", index: 152.6 },
    City { slug: "seattle", name: "Seattle, WA", index: 152.1 },
    City { slug: "los-angeles", name: "Los Angeles, CA", index: 146.7 },
    City { slug: "washington-dc", name: "Washington, DC", index: 145.9 },
    City { slug: "miami", name: "Miami, FL", index: 123.1 },
    City { slug: "denver", name: "Denver, CO", index: 112.3 },
    City { slug: "chicago", name: "Chicago, IL", index: 107.0 },
    City { slug: "phoenix", name: "Phoenix, AZ", index: 103.5 },
    City { slug: "dallas", name: "Dallas, TX", index: 102.0 },
    City { slug: "austin", name: "Austin, TX", index: 101.7 },
    City { slug: "atlanta", name: "Atlanta, GA", index: 101.6 },
    City { slug: "national-average", name: "National average", index: NATIONAL_AVERAGE_INDEX },
    City { slug: "houston", name: "Houston, TX", index: 94.9 },
    City { slug: "kansas-city", name: "Kansas City, MO", index: 93.4 },
    City { slug: "memphis", name: "Memphis, TN", index: 84.2 },
];

pub fn find_city(slug: &str) -> CalculatorResult<&'static City> {
    CITIES
        .iter()
        .find(|city| city.slug == slug)
        .ok_or_else(|| CalculatorError::UnknownCity(slug.to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostOfLivingResult {
    pub salary: f64,
    pub from_index: f64,
    pub to_index: f64,
    /// Salary with the same purchasing power in the destination.
    pub equivalent_salary: f64,
    pub difference: f64,
    pub percent_difference: f64,
}

/// `equivalent = salary * to_index / from_index`.
///
/// # Errors
///
/// Rejects a negative salary and non-positive indices.
pub fn compare_indices(salary: f64, from_index: f64, to_index: f64) -> CalculatorResult<CostOfLivingResult> {
    let salary = ensure_non_negative("salary", salary)?;
    let from_index = ensure_positive("from_index", from_index)?;
    let to_index = ensure_positive("to_index", to_index)?;

    let ratio = to_index / from_index;
    let equivalent_salary = salary * ratio;
    let percent_difference = (ratio - 1.0) * 100.0;
    ensure_results(&[
        ("equivalent_salary", equivalent_salary),
        ("percent_difference", percent_difference),
    ])?;

    Ok(CostOfLivingResult {
        salary,
        from_index,
        to_index,
        equivalent_salary,
        difference: equivalent_salary - salary,
        percent_difference,
    })
}

/// Compares two cities from the built-in index table.
pub fn compare_cities(salary: f64, from: &str, to: &str) -> CalculatorResult<CostOfLivingResult> {
    let from = find_city(from)?;
    let to = find_city(to)?;
    compare_indices(salary, from.index, to.index)
}
