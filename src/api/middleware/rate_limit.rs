//! Rate limiting middleware using token bucket algorithm.

use std::net::IpAddr;
use std::sync::Arc;

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Sustained requests per second allowed per client.
pub const PER_SECOND: u64 = 2;

/// Requests a client may burst before throttling starts.
pub const BURST_SIZE: u32 = 100;

pub type ApiRateLimitLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Keys requests by client IP.
///
/// Behind a reverse proxy the address comes from `X-Forwarded-For`,
/// `X-Real-Ip` or `Forwarded`; otherwise from the socket peer address.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    pub behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

/// Creates the rate limiter for the calculator API.
///
/// # Limits
///
/// - **Rate**: [`PER_SECOND`] requests per second
/// - **Burst**: [`BURST_SIZE`] requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Example
///
/// ```rust,ignore
/// let api = Router::new()
///     .nest("/calculators", calculator_routes())
///     .layer(rate_limit::layer(config.behind_proxy)?);
/// ```
pub fn layer(behind_proxy: bool) -> anyhow::Result<ApiRateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor { behind_proxy })
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
