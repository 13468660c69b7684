//! HTML page handlers.

mod blog;
mod guides;
mod home;
mod pages;
mod seo;
mod tools;

pub use blog::{article_handler, blog_handler};
pub use guides::{guide_handler, guides_handler};
pub use home::home_handler;
pub use pages::{about_handler, faq_handler};
pub use seo::{robots_handler, sitemap_handler};
pub use tools::{tool_handler, tools_handler};
