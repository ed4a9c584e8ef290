//! HTTP gateway: axum router in front of the polling coordinator.
//!
//! - `routes.rs`: handlers (`/status`, `/health`, `/debug/state`)
//! - `errors.rs`: mapping of coordinator errors to HTTP responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::coordinator::PollingCoordinator;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(coordinator: Arc<PollingCoordinator>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/status", get(routes::status))
        .route("/debug/state", get(routes::debug_state))
        .layer(Extension(coordinator))
}
