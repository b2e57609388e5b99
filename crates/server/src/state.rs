use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::metrics::{NoopMetrics, PrometheusMetrics, RequestMetrics};
use analysis::Operation;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Operation answered on `POST /op`
    pub operation: Operation,

    /// Request counter, shared across handlers
    pub metrics: Arc<dyn RequestMetrics>,
}

impl ServerState {
    /// Create new server state, picking the metrics backend from config
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let metrics: Arc<dyn RequestMetrics> = if config.metrics_enabled {
            Arc::new(PrometheusMetrics::new())
        } else {
            Arc::new(NoopMetrics)
        };
        Self::with_metrics(config, metrics)
    }

    /// Create new server state with a caller-supplied metrics collaborator
    pub fn with_metrics(
        config: ServerConfig,
        metrics: Arc<dyn RequestMetrics>,
    ) -> ServerResult<Self> {
        config.validate()?;

        Ok(Self {
            operation: config.operation,
            config: Arc::new(config),
            metrics,
        })
    }
}
