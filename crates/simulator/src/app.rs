//! HTTP surface of the simulated upstream.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::get, Json, Router};

use vtsim_core::StatusResponse;

use crate::job::SimulatedJob;

/// Build the simulator router.
pub fn build_app(job: Arc<SimulatedJob>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .layer(Extension(job))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn status(Extension(job): Extension<Arc<SimulatedJob>>) -> Json<StatusResponse> {
    Json(StatusResponse::new(job.observe().await))
}
