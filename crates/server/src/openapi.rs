use axum::{middleware, Router};
use shared_types::{
    AccessCheckResponse, AccessContext, AccessContextResponse, AppError, AppErrorKind,
    PlatformRole, RedirectSuggestion, SessionContextResponse,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::access::get_access_context,
        rest::access::check_access,
        rest::session::get_session,
        health::health_check,
    ),
    components(schemas(
        AccessContext,
        AccessContextResponse,
        AccessCheckResponse,
        SessionContextResponse,
        RedirectSuggestion,
        PlatformRole,
        AppError,
        AppErrorKind,
        HealthResponse,
    )),
    tags(
        (name = "access", description = "Hostname-based access context resolution"),
        (name = "session", description = "Caller context on the current host"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Org Admin Access API",
        description = "Access-context resolution for the Platform Portal and Organization Network",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build the full application router: REST API, health check and API docs
/// at `/docs`, wrapped in the access guard, request tracing and request ids.
pub fn api_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state.clone())
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::access_guard::access_guard,
        ));

    if state.flags.request_logging {
        router = router.layer(crate::telemetry::http_trace_layer());
    }

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
