//! Request tracing for the HTTP surface.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// One `INFO` span per request with method, URI and version.
///
/// Request start is logged at `DEBUG`, completion at `INFO` with status and
/// latency in milliseconds. 5xx responses are additionally logged at `ERROR`,
/// which is where a failing health task or store outage shows up.
///
/// ```text
/// INFO request{method=POST uri=/api/debug-logs/resolve version=HTTP/1.1}: finished processing request latency=3 ms status=404
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
