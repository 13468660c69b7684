#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use payraise_calculator::api::routes::calculator_routes;
use payraise_calculator::domain::entities::SiteIdentity;
use payraise_calculator::infrastructure::content::StaticContentRepository;
use payraise_calculator::routes::site_router;
use payraise_calculator::state::AppState;
use url::Url;

pub const TEST_ORIGIN: &str = "http://test.local";

pub fn test_site() -> SiteIdentity {
    SiteIdentity::new("PayRaise Calculator", Url::parse(TEST_ORIGIN).unwrap())
        .with_twitter_handle(Some("@payraisecalc".to_string()))
}

pub fn create_test_state() -> AppState {
    AppState::new(test_site(), StaticContentRepository::new())
}

/// Full site router; the API is mounted without the rate limiter, which
/// needs a peer address the test transport does not provide.
pub fn create_test_app() -> Router {
    let api = Router::new().nest("/calculators", calculator_routes());
    site_router(create_test_state(), api, "static")
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app()).unwrap()
}

/// Extracts every inline JSON-LD payload from an HTML page.
pub fn json_ld_blocks(html: &str) -> Vec<serde_json::Value> {
    const OPEN: &str = r#"<script type="application/ld+json">"#;

    html.split(OPEN)
        .skip(1)
        .filter_map(|rest| rest.split("</script>").next())
        .map(|json| serde_json::from_str(json).unwrap())
        .collect()
}

pub fn json_ld_of_type(html: &str, kind: &str) -> serde_json::Value {
    json_ld_blocks(html)
        .into_iter()
        .find(|block| block["@type"] == kind)
        .unwrap_or_else(|| panic!("no {kind} JSON-LD block"))
}
