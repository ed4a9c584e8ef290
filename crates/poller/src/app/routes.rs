use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use vtsim_core::StatusResponse;

use crate::app::errors::poll_error_to_response;
use crate::coordinator::PollingCoordinator;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /status`: one poll against the coordinator.
pub async fn status(Extension(coordinator): Extension<Arc<PollingCoordinator>>) -> Response {
    match coordinator.handle_poll().await {
        Ok(status) => (StatusCode::OK, Json(StatusResponse::new(status))).into_response(),
        Err(err) => poll_error_to_response(err),
    }
}

pub async fn debug_state(
    Extension(coordinator): Extension<Arc<PollingCoordinator>>,
) -> impl IntoResponse {
    Json(coordinator.snapshot().await)
}
