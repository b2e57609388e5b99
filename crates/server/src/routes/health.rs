use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Liveness probe
pub async fn healthz() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// Prometheus metrics endpoint
///
/// 404 when metrics are disabled.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<Response> {
    let body = state.metrics.render().ok_or(ServerError::NotFound)?;

    Ok((
        [(CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response())
}
