mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn approx(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-6
}

#[tokio::test]
async fn test_raise_success() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise")
        .json(&json!({ "current_salary": 50000, "raise_percent": 5 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["calculator"], "raise");
    assert!(approx(&json["result"]["new_salary"], 52_500.0));
    assert!(approx(&json["result"]["increase_amount"], 2_500.0));
    assert!(json["result"].get("industry_comparison").is_none());
}

#[tokio::test]
async fn test_raise_accepts_numeric_strings_and_industry() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise")
        .json(&json!({
            "current_salary": "60000",
            "raise_percent": "6",
            "industry": "technology"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let comparison = &json["result"]["industry_comparison"];
    assert_eq!(comparison["industry"], "Technology");
    assert_eq!(comparison["verdict"], "above_average");
}

#[tokio::test]
async fn test_raise_unknown_industry() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise")
        .json(&json!({ "current_salary": 50000, "raise_percent": 5, "industry": "piracy" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Unknown industry: piracy");
}

#[tokio::test]
async fn test_raise_negative_salary_rejected() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise")
        .json(&json!({ "current_salary": -1, "raise_percent": 5 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"].get("current_salary").is_some());
}

#[tokio::test]
async fn test_raise_percentage() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise-percentage")
        .json(&json!({ "old_salary": 50000, "new_salary": 55000 }))
        .await;

    response.assert_status_ok();
    assert!(approx(&response.json::<Value>()["result"]["raise_percent"], 10.0));
}

#[tokio::test]
async fn test_raise_percentage_zero_old_salary() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise-percentage")
        .json(&json!({ "old_salary": 0, "new_salary": 55000 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inflation_defaults_to_one_year() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/inflation")
        .json(&json!({ "current_salary": 50000, "raise_percent": 3, "inflation_rate": 3 }))
        .await;

    response.assert_status_ok();

    let result = &response.json::<Value>()["result"];
    assert!(approx(&result["real_raise_percent"], 0.0));
    assert!(approx(&result["salary_to_keep_pace"], 51_500.0));
}

#[tokio::test]
async fn test_hourly_and_salary_round_trip() {
    let server = common::create_test_server();

    let annual = server
        .post("/api/calculators/hourly")
        .json(&json!({ "hourly_rate": 25 }))
        .await
        .json::<Value>()["result"]["annual"]
        .as_f64()
        .unwrap();
    assert!((annual - 52_000.0).abs() < 1e-6);

    let hourly = server
        .post("/api/calculators/salary")
        .json(&json!({ "annual_salary": annual }))
        .await
        .json::<Value>()["result"]["hourly"]
        .as_f64()
        .unwrap();
    assert!((hourly - 25.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_hourly_invalid_schedule() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/hourly")
        .json(&json!({ "hourly_rate": 25, "hours_per_week": 200 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cost_of_living_by_city() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/cost-of-living")
        .json(&json!({ "salary": 100000, "from_city": "national-average", "to_city": "memphis" }))
        .await;

    response.assert_status_ok();
    assert!(approx(
        &response.json::<Value>()["result"]["equivalent_salary"],
        84_200.0
    ));
}

#[tokio::test]
async fn test_cost_of_living_by_index() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/cost-of-living")
        .json(&json!({ "salary": 50000, "from_index": 100, "to_index": 150 }))
        .await;

    response.assert_status_ok();
    assert!(approx(
        &response.json::<Value>()["result"]["equivalent_salary"],
        75_000.0
    ));
}

#[tokio::test]
async fn test_cost_of_living_requires_locations() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/cost-of-living")
        .json(&json!({ "salary": 50000, "from_city": "austin" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_promotion_with_offer() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/promotion")
        .json(&json!({
            "current_salary": 100000,
            "level": "mid-to-senior",
            "offered_salary": 105000
        }))
        .await;

    response.assert_status_ok();

    let result = &response.json::<Value>()["result"];
    assert_eq!(result["level"], "mid-to-senior");
    assert!(approx(&result["typical_salary"], 112_000.0));
    assert_eq!(result["offer"]["position"], "below");
}

#[tokio::test]
async fn test_promotion_unknown_level() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/promotion")
        .json(&json!({ "current_salary": 100000, "level": "intern-to-ceo" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_total_compensation() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/total-compensation")
        .json(&json!({
            "base_salary": 100000,
            "annual_bonus": 10000,
            "retirement_match_percent": 4,
            "benefits_value": 6000
        }))
        .await;

    response.assert_status_ok();

    let result = &response.json::<Value>()["result"];
    assert!(approx(&result["retirement_match"], 4_000.0));
    assert!(approx(&result["total"], 120_000.0));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise")
        .text("not json")
        .content_type("application/json")
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_total_compensation_accepts_numeric_strings() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/total-compensation")
        .json(&json!({ "base_salary": "90000", "annual_bonus": "10000" }))
        .await;

    response.assert_status_ok();
    assert!(approx(&response.json::<Value>()["result"]["total"], 100_000.0));
}

#[tokio::test]
async fn test_promotion_accepts_numeric_string_offer() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/promotion")
        .json(&json!({
            "current_salary": "100000",
            "level": "mid-to-senior",
            "offered_salary": "120000"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["result"]["offer"]["position"], "above");
}

#[tokio::test]
async fn test_hourly_accepts_numeric_string_schedule() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/hourly")
        .json(&json!({
            "hourly_rate": "20",
            "hours_per_week": "30",
            "weeks_per_year": "50"
        }))
        .await;

    response.assert_status_ok();
    assert!(approx(&response.json::<Value>()["result"]["annual"], 30_000.0));
}

#[tokio::test]
async fn test_raise_overflow_rejected() {
    let server = common::create_test_server();

    let response = server
        .post("/api/calculators/raise")
        .json(&json!({ "current_salary": 1e308, "raise_percent": 900 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "new_salary");
}
