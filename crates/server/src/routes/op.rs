use crate::state::ServerState;
use analysis::{OperationRequest, OperationResult};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// Run the configured operation.
///
/// The body is read raw and parsed leniently: invalid JSON, a non-object
/// body, or a missing/non-string `text` all produce the operation's default
/// value with status 200.
///
/// # Example
/// ```json
/// // Request
/// { "text": "racecar" }
///
/// // Response (palindrome service)
/// { "key": "palindrome", "value": true, "cache_hit": false }
/// ```
pub async fn run_operation(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Json<OperationResult> {
    let request = OperationRequest::from_json_slice(&body);
    let result = state.operation.handle(&request);

    tracing::debug!(
        operation = %state.operation,
        text_present = request.text.is_some(),
        body_bytes = body.len(),
        "Operation handled"
    );

    Json(result)
}
