use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::coordinator::PollError;

/// Coordinator errors are plain-text 500s; callers only need to know polling gave up.
pub fn poll_error_to_response(err: PollError) -> axum::response::Response {
    match err {
        PollError::RetryCeilingExceeded { attempts, sequence } => {
            tracing::warn!(%sequence, attempts, "reporting exhausted polling sequence to caller");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Max retries reached after {attempts} upstream attempts"),
            )
                .into_response()
        }
    }
}
