//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SITE_URL="https://www.payraisecalculator.com"
//! export SITE_NAME="PayRaise Calculator"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `SITE_URL` - Absolute origin for canonical URLs (default: `https://www.payraisecalculator.com`)
//! - `SITE_NAME` - Brand appended to page titles (default: `PayRaise Calculator`)
//! - `TWITTER_HANDLE` - Twitter/X handle for `twitter:site`, e.g. `@payraisecalc`
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IPs from forwarding headers (default: `false`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::domain::entities::SiteIdentity;
use crate::domain::entities::site::{DEFAULT_SITE_NAME, DEFAULT_SITE_URL};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub site_url: String,
    pub site_name: String,
    pub twitter_handle: Option<String>,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            twitter_handle: None,
            static_dir: "static".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let twitter_handle = env::var("TWITTER_HANDLE")
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            site_url: env::var("SITE_URL").unwrap_or(defaults.site_url),
            site_name: env::var("SITE_NAME").unwrap_or(defaults.site_name),
            twitter_handle,
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            behind_proxy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `site_url` is not an absolute `http`/`https` URL, or carries a path,
    ///   query or fragment
    /// - `site_name` is blank
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let url = self.parsed_site_url()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "SITE_URL must start with 'http://' or 'https://', got '{}'",
                self.site_url
            );
        }

        if self.site_name.trim().is_empty() {
            anyhow::bail!("SITE_NAME must not be empty");
        }

        Ok(())
    }

    fn parsed_site_url(&self) -> Result<Url> {
        let url = Url::parse(&self.site_url)
            .with_context(|| format!("SITE_URL is not a valid absolute URL: '{}'", self.site_url))?;

        // Pages are routed from the root, so the base must be a bare origin.
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            anyhow::bail!(
                "SITE_URL must be an origin without a path, got '{}'",
                self.site_url
            );
        }

        Ok(url)
    }

    /// Builds the site identity every page and schema is composed from.
    pub fn site_identity(&self) -> Result<SiteIdentity> {
        Ok(
            SiteIdentity::new(self.site_name.trim(), self.parsed_site_url()?)
                .with_twitter_handle(self.twitter_handle.clone()),
        )
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site: {} ({})", self.site_name, self.site_url);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
