//! Public page route configuration.

use axum::{Router, routing::get};

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, article_handler, blog_handler, faq_handler, guide_handler, guides_handler,
    home_handler, robots_handler, sitemap_handler, tool_handler, tools_handler,
};

/// Server-rendered pages and SEO files.
///
/// # Endpoints
///
/// - `GET /`               - Home
/// - `GET /tools`          - Calculator index
/// - `GET /tools/{slug}`   - Calculator page and form
/// - `GET /blog`           - Blog index
/// - `GET /blog/{slug}`    - Article
/// - `GET /guides`         - Guide index
/// - `GET /guides/{slug}`  - Guide
/// - `GET /faq`            - FAQ
/// - `GET /about`          - About
/// - `GET /sitemap.xml`    - Sitemap
/// - `GET /robots.txt`     - Robots directives
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/tools", get(tools_handler))
        .route("/tools/{slug}", get(tool_handler))
        .route("/blog", get(blog_handler))
        .route("/blog/{slug}", get(article_handler))
        .route("/guides", get(guides_handler))
        .route("/guides/{slug}", get(guide_handler))
        .route("/faq", get(faq_handler))
        .route("/about", get(about_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/robots.txt", get(robots_handler))
}
