//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Replenish rate, in requests per second.
const PER_SECOND: u64 = 5;
/// Requests a single client may send in a burst.
const BURST_SIZE: u32 = 50;

type Layer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> Layer<PeerIpKeyExtractor> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter keyed by the client address a reverse proxy forwards.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded`, falling back to the
/// peer address. Only safe behind a trusted proxy.
pub fn proxy_layer() -> Layer<SmartIpKeyExtractor> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Applies the limiter matching the deployment to `router`.
///
/// # Example
///
/// ```rust,ignore
/// let api = rate_limit::apply(api_routes(), config.behind_proxy);
/// ```
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(proxy_layer())
    } else {
        router.layer(layer())
    }
}
