mod common;

use axum::http::StatusCode;
use common::{json_ld_blocks, json_ld_of_type};

#[tokio::test]
async fn test_home_page() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>PayRaise Calculator - Free Salary &amp; Pay Raise Calculators</title>"));
    assert!(html.contains(r#"<link rel="canonical" href="http://test.local/">"#));
    assert!(html.contains(r#"<meta name="twitter:site" content="@payraisecalc">"#));

    let website = json_ld_of_type(&html, "WebSite");
    assert_eq!(website["@context"], "https://schema.org");
    assert_eq!(website["url"], "http://test.local");
}

#[tokio::test]
async fn test_home_page_has_no_breadcrumbs() {
    let server = common::create_test_server();

    let html = server.get("/").await.text();

    assert!(!html.contains(r#"aria-label="Breadcrumb""#));
    assert!(
        json_ld_blocks(&html)
            .iter()
            .all(|block| block["@type"] != "BreadcrumbList")
    );
}

#[tokio::test]
async fn test_tools_index_lists_every_calculator() {
    let server = common::create_test_server();

    let response = server.get("/tools").await;

    response.assert_status_ok();
    let html = response.text();
    for slug in [
        "pay-raise-calculator",
        "inflation-raise-calculator",
        "hourly-to-salary-calculator",
        "cost-of-living-calculator",
        "promotion-raise-calculator",
        "total-compensation-calculator",
    ] {
        assert!(html.contains(&format!("/tools/{slug}")), "missing {slug}");
    }
}

#[tokio::test]
async fn test_tool_page_metadata() {
    let server = common::create_test_server();

    let response = server.get("/tools/pay-raise-calculator").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<title>Pay Raise Calculator: See Your New Salary | PayRaise Calculator</title>"));
    assert!(html.contains(
        r#"<link rel="canonical" href="http://test.local/tools/pay-raise-calculator">"#
    ));

    let app = json_ld_of_type(&html, "SoftwareApplication");
    assert_eq!(app["url"], "http://test.local/tools/pay-raise-calculator");
    assert_eq!(app["applicationCategory"], "FinanceApplication");
    assert!(!app["featureList"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_tool_page_breadcrumbs() {
    let server = common::create_test_server();

    let html = server.get("/tools/pay-raise-calculator").await.text();

    let trail = json_ld_of_type(&html, "BreadcrumbList");
    let items = trail["itemListElement"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Home");
    assert_eq!(items[0]["position"], 1);
    assert_eq!(items[1]["item"], "http://test.local/tools");
    assert_eq!(items[2]["position"], 3);

    assert!(html.contains(r#"<a href="/tools">Tools</a>"#));
    assert!(html.contains(r#"<span aria-current="page">Pay Raise Calculator</span>"#));
}

#[tokio::test]
async fn test_tool_form_submission_shows_results() {
    let server = common::create_test_server();

    let response = server
        .get("/tools/pay-raise-calculator")
        .add_query_param("current_salary", "50000")
        .add_query_param("raise_percent", "5")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("$52,500.00"));
    assert!(html.contains(r#"value="50000""#));
}

#[tokio::test]
async fn test_tool_form_rejected_input_shows_error() {
    let server = common::create_test_server();

    let html = server
        .get("/tools/hourly-to-salary-calculator")
        .add_query_param("amount", "20")
        .add_query_param("weeks_per_year", "60")
        .await
        .text();

    assert!(html.contains(r#"class="error""#));
    assert!(html.contains("weeks_per_year must be between"));
}

#[tokio::test]
async fn test_canonical_ignores_query_string() {
    let server = common::create_test_server();

    let html = server
        .get("/tools/cost-of-living-calculator")
        .add_query_param("salary", "70000")
        .await
        .text();

    assert!(html.contains(
        r#"<link rel="canonical" href="http://test.local/tools/cost-of-living-calculator">"#
    ));
}

#[tokio::test]
async fn test_unknown_tool_is_404() {
    let server = common::create_test_server();

    let response = server.get("/tools/mortgage-calculator").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
}

#[tokio::test]
async fn test_malformed_slug_is_404() {
    let server = common::create_test_server();

    server
        .get("/blog/Not_A_Slug")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unrouted_path_is_404() {
    let server = common::create_test_server();

    let response = server.get("/does/not/exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"<link rel="canonical" href="http://test.local/">"#));
    assert!(!html.contains("http://test.local/does/not/exist"));
}

#[tokio::test]
async fn test_blog_index_newest_first() {
    let server = common::create_test_server();

    let html = server.get("/blog").await.text();

    let positions: Vec<usize> = [
        "/blog/negotiating-a-promotion-salary",
        "/blog/raise-vs-inflation",
        "/blog/average-raise-by-industry",
        "/blog/how-to-ask-for-a-raise",
    ]
    .iter()
    .map(|path| html.find(path).unwrap())
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_article_page() {
    let server = common::create_test_server();

    let response = server.get("/blog/how-to-ask-for-a-raise").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"<meta property="og:type" content="article">"#));

    let article = json_ld_of_type(&html, "Article");
    assert_eq!(article["author"]["@type"], "Person");
    assert_eq!(article["author"]["name"], "Jordan Ellis");
    assert_eq!(article["publisher"]["@type"], "Organization");
    assert_eq!(
        article["mainEntityOfPage"]["@id"],
        "http://test.local/blog/how-to-ask-for-a-raise"
    );
    assert!(article.get("dateModified").is_some());
}

#[tokio::test]
async fn test_article_without_author_credits_organization() {
    let server = common::create_test_server();

    let html = server.get("/blog/average-raise-by-industry").await.text();

    let article = json_ld_of_type(&html, "Article");
    assert_eq!(article["author"]["@type"], "Organization");
    assert_eq!(article["author"]["name"], "PayRaise Calculator");
}

#[tokio::test]
async fn test_guide_with_steps_is_how_to() {
    let server = common::create_test_server();

    let html = server.get("/guides/salary-negotiation-guide").await.text();

    let how_to = json_ld_of_type(&html, "HowTo");
    let steps = how_to["step"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    for (index, step) in steps.iter().enumerate() {
        assert_eq!(step["position"], index + 1);
    }
}

#[tokio::test]
async fn test_guide_without_steps_is_learning_resource() {
    let server = common::create_test_server();

    let html = server
        .get("/guides/understanding-total-compensation")
        .await
        .text();

    let resource = json_ld_of_type(&html, "LearningResource");
    assert_eq!(resource["learningResourceType"], "Guide");
}

#[tokio::test]
async fn test_faq_page() {
    let server = common::create_test_server();

    let html = server.get("/faq").await.text();

    let faq = json_ld_of_type(&html, "FAQPage");
    let questions = faq["mainEntity"].as_array().unwrap();
    assert!(!questions.is_empty());
    assert_eq!(questions[0]["@type"], "Question");
    assert_eq!(questions[0]["acceptedAnswer"]["@type"], "Answer");
}

#[tokio::test]
async fn test_about_page() {
    let server = common::create_test_server();

    let html = server.get("/about").await.text();

    assert!(html.contains("<title>About PayRaise Calculator</title>"));
    let org = json_ld_of_type(&html, "Organization");
    assert_eq!(org["logo"]["url"], "http://test.local/static/logo.png");
}
