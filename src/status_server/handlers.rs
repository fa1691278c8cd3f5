//! Status server request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::status::poll_task;

use super::types::StatusState;

/// Handler for the `/status` endpoint.
///
/// Builds a fresh poll response per request. On a build failure the caller
/// gets a generic error body rather than a partial report.
pub async fn status_handler(State(state): State<StatusState>) -> Response {
    let response = match poll_task(
        state.store.as_ref(),
        state.tree.as_ref(),
        state.policy,
        state.stats.as_ref(),
    ) {
        Ok(response) => response,
        Err(e) => {
            log::error!("Status poll failed: {:#}", e);
            let body = serde_json::json!({ "LinkCheckError": format!("{e:#}") }).to_string();
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [("content-type", "application/json")],
                body,
            )
                .into_response();
        }
    };

    let json = match serde_json::to_string(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}
