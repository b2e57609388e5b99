//! Request counting for the `/metrics` endpoint.
//!
//! The counter is a collaborator injected into [`ServerState`](crate::ServerState)
//! rather than a process-wide static, so every router (and every test) owns
//! its own registry. Nothing in the analysis crate sees it.

use metrics::{counter, describe_counter, with_local_recorder};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

/// Counter name exported on `/metrics`.
pub const REQUESTS_TOTAL: &str = "textops_requests_total";

/// Observer for handled requests.
pub trait RequestMetrics: Send + Sync {
    /// Count one request to `endpoint` (`"op"`, `"healthz"`).
    fn record_request(&self, endpoint: &str);

    /// Prometheus text exposition, or `None` when nothing is exported.
    fn render(&self) -> Option<String>;
}

/// Prometheus-backed counter registry.
///
/// The recorder is never installed globally; counters are routed to it with
/// [`with_local_recorder`].
pub struct PrometheusMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl PrometheusMetrics {
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        with_local_recorder(&recorder, || {
            describe_counter!(REQUESTS_TOTAL, "Total requests handled, by endpoint");
        });

        Self { recorder, handle }
    }
}

impl Default for PrometheusMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestMetrics for PrometheusMetrics {
    fn record_request(&self, endpoint: &str) {
        with_local_recorder(&self.recorder, || {
            counter!(REQUESTS_TOTAL, "endpoint" => endpoint.to_owned()).increment(1);
        });
    }

    fn render(&self) -> Option<String> {
        Some(self.handle.render())
    }
}

/// Used when metrics are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl RequestMetrics for NoopMetrics {
    fn record_request(&self, _endpoint: &str) {}

    fn render(&self) -> Option<String> {
        None
    }
}
