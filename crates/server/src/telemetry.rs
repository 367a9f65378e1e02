use axum::{body::Body, http::Request};
use tower_http::trace::{HttpMakeClassifier, TraceLayer};
use tracing::Span;
use tracing_subscriber::EnvFilter;

/// Span constructor used by [`http_trace_layer`].
pub type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn make_request_span(req: &Request<Body>) -> Span {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };
    tracing::info_span!(
        "http_request",
        method = %req.method(),
        path = %req.uri().path(),
        host = %header("host"),
        request_id = %header("x-request-id"),
    )
}

/// Per-request span carrying the host and request id, so access-guard
/// decisions can be correlated with the request that triggered them.
pub fn http_trace_layer() -> TraceLayer<HttpMakeClassifier, MakeRequestSpan> {
    TraceLayer::new_for_http().make_span_with(make_request_span as MakeRequestSpan)
}
