//! HTTP route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{index, AppState};

/// Create the router. Anything other than `GET /` falls through to
/// axum's default not-found handling.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
