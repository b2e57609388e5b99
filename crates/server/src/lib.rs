//! textops server - HTTP transport for one analysis operation
//!
//! Each deployment answers exactly one operation (chosen by the `operation`
//! setting) behind a uniform contract:
//!
//! - `POST /op` - `{"text": "..."}` in, `{"key", "value", "cache_hit"}` out.
//!   Always 200; a missing, non-string or unparseable `text` yields the
//!   operation's default value.
//! - `GET /healthz` - `{"ok": true}`
//! - `GET /metrics` - Prometheus request counter, labeled by endpoint
//! - `GET /` - service info
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! `textops-server.toml` (optional), `TEXTOPS_*` environment variables
//! (`TEXTOPS_OPERATION=entropy`, `TEXTOPS_PORT=9000`), and `PORT`, which
//! wins over both. The default port is 8085.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use metrics::{NoopMetrics, PrometheusMetrics, RequestMetrics};
pub use server::{build_router, start_server};
pub use state::ServerState;
