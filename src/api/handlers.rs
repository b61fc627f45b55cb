//! HTTP handlers.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error};

use crate::config::Config;
use crate::error::DashError;
use crate::host::HostFacts;
use crate::render::{RenderContext, StoreStatus};
use crate::store::CounterStore;

/// Application state shared with handlers.
///
/// The store handle is the single long-lived client reused across all
/// requests; handlers hold no other mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Shared counter-store client.
    pub store: Arc<dyn CounterStore>,
    /// Loaded configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state around a store client and config.
    pub fn new(store: Arc<dyn CounterStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }
}

/// `GET /` — render the dashboard.
///
/// Any failure while gathering data or rendering collapses to one
/// plain-text 500; no retries, no partial render.
pub async fn index(State(state): State<AppState>) -> Response {
    match render_dashboard(&state).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("dashboard request failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}")).into_response()
        }
    }
}

/// Gather everything the dashboard shows and render it.
async fn render_dashboard(state: &AppState) -> Result<String, DashError> {
    // Increment first: the counter moves even when a later step fails,
    // so increments are not transactional with response success.
    let visit_count = state.store.increment().await?;

    let facts = HostFacts::gather().await?;

    // Independent of the increment: a store that answers the increment
    // but reports an unhealthy ping still renders, as Disconnected.
    let status = StoreStatus::from_ping(state.store.ping().await?);

    debug!(visit_count, %status, "rendering dashboard");

    let ctx = RenderContext::new(visit_count, facts, status, &state.config);
    Ok(ctx.render()?)
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[tokio::test]
    async fn render_dashboard_produces_html() {
        let state = AppState::new(
            Arc::new(MockStore::new()),
            Arc::new(Config::default()),
        );

        let html = render_dashboard(&state).await.unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Total Visits: 1"));
    }

    #[tokio::test]
    async fn render_dashboard_propagates_store_failure() {
        let state = AppState::new(
            Arc::new(MockStore::with_config(crate::store::MockConfig {
                fail_increment: true,
                ..Default::default()
            })),
            Arc::new(Config::default()),
        );

        let err = render_dashboard(&state).await.unwrap_err();
        assert!(err.to_string().contains("store"));
    }
}
