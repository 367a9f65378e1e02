pub mod access;
pub mod session;

use axum::{routing::get, Router};
use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Access context
        .route("/api/access/context", get(access::get_access_context))
        .route("/api/access/check", get(access::check_access))
        // Session
        .route("/api/session", get(session::get_session))
}
