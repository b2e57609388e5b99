//! API route handlers
//!
//! - `op`: the analysis operation
//! - `health`: liveness and metrics

pub mod health;
pub mod op;

use crate::error::ServerError;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Endpoints listed by [`service_info`]
pub const ENDPOINTS: [&str; 4] = ["/", "/op", "/healthz", "/metrics"];

/// Service description returned on `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub operation: String,
    pub endpoints: Vec<&'static str>,
    pub uptime_seconds: u64,
    pub timestamp: String,
}

/// Force the uptime clock to start now
pub fn mark_started() {
    once_cell::sync::Lazy::force(&SERVER_START_TIME);
}

/// Service name, version and the operation this instance answers
pub async fn service_info(State(state): State<Arc<ServerState>>) -> Json<ServiceInfo> {
    let uptime = SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(ServiceInfo {
        name: "textops",
        version: env!("CARGO_PKG_VERSION"),
        operation: state.operation.to_string(),
        endpoints: ENDPOINTS.to_vec(),
        uptime_seconds: uptime,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
