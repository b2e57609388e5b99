use analysis::Operation;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Operation served on `POST /op`, by key or alias
    #[serde(
        default = "default_operation",
        deserialize_with = "deserialize_operation"
    )]
    pub operation: Operation,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            operation: default_operation(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional config file and the environment.
    ///
    /// Sources, lowest precedence first: `textops-server.{toml,yaml,json}`,
    /// `TEXTOPS_*` variables, then a bare `PORT` variable.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with_env(None, std::env::var("PORT").ok())
    }

    /// Same layering as [`ServerConfig::load`], with the `TEXTOPS_*`
    /// variables and the `PORT` value supplied by the caller.
    ///
    /// `vars` of `None` reads the process environment.
    pub fn load_with_env(
        vars: Option<config::Map<String, String>>,
        port_override: Option<String>,
    ) -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("textops-server").required(false))
            .add_source(config::Environment::with_prefix("TEXTOPS").source(vars))
            .set_override_option("port", port_override)?;

        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> ServerResult<()> {
        if self.timeout_secs == 0 {
            return Err(ServerError::Config("timeout_secs must be >= 1".into()));
        }
        if self.max_body_size_mb == 0 {
            return Err(ServerError::Config("max_body_size_mb must be >= 1".into()));
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8085
}

fn default_operation() -> Operation {
    Operation::UniqueWords
}

fn deserialize_operation<'de, D>(deserializer: D) -> Result<Operation, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<ServerConfig> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        ServerConfig::from_builder(builder)
    }

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8085);
        assert_eq!(cfg.operation, Operation::UniqueWords);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 10);
        assert!(cfg.enable_cors);
        assert!(cfg.metrics_enabled);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8085);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let cfg = ServerConfig {
            bind_addr: "not an address".into(),
            ..Default::default()
        };
        assert!(matches!(cfg.socket_addr(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let cfg = from_toml("").unwrap();
        assert_eq!(cfg.port, 8085);
        assert_eq!(cfg.bind_addr, "0.0.0.0");
        assert_eq!(cfg.operation, Operation::UniqueWords);
    }

    #[test]
    fn test_operation_alias_from_file() {
        let cfg = from_toml("operation = \"normalizer\"\nport = 9000").unwrap();
        assert_eq!(cfg.operation, Operation::Normalize);
        assert_eq!(cfg.port, 9000);
    }

    #[test]
    fn test_operation_name_is_case_insensitive() {
        let cfg = from_toml("operation = \"PALINDROME\"").unwrap();
        assert_eq!(cfg.operation, Operation::Palindrome);
    }

    #[test]
    fn test_unknown_operation_rejected() {
        assert!(from_toml("operation = \"sentiment\"").is_err());
    }

    #[test]
    fn test_zero_body_limit_rejected() {
        assert!(from_toml("max_body_size_mb = 0").is_err());
    }

    #[test]
    fn test_bare_port_overrides_prefixed_port() {
        let vars = env(&[("TEXTOPS_PORT", "9000")]);
        let cfg = ServerConfig::load_with_env(Some(vars), Some("7000".into())).unwrap();
        assert_eq!(cfg.port, 7000);
    }

    #[test]
    fn test_prefixed_env_without_bare_port() {
        let vars = env(&[("TEXTOPS_PORT", "9000"), ("TEXTOPS_ENABLE_CORS", "false")]);
        let cfg = ServerConfig::load_with_env(Some(vars), None).unwrap();
        assert_eq!(cfg.port, 9000);
        assert!(!cfg.enable_cors);
    }

    #[test]
    fn test_operation_from_env() {
        let vars = env(&[("TEXTOPS_OPERATION", "entropy")]);
        let cfg = ServerConfig::load_with_env(Some(vars), None).unwrap();
        assert_eq!(cfg.operation, Operation::Entropy);

        let vars = env(&[("TEXTOPS_OPERATION", "normalizer")]);
        let cfg = ServerConfig::load_with_env(Some(vars), None).unwrap();
        assert_eq!(cfg.operation, Operation::Normalize);
    }

    #[test]
    fn test_empty_env_uses_defaults() {
        let cfg = ServerConfig::load_with_env(Some(env(&[])), None).unwrap();
        assert_eq!(cfg.port, 8085);
        assert_eq!(cfg.operation, Operation::UniqueWords);
    }

    #[test]
    fn test_invalid_env_values_rejected() {
        assert!(ServerConfig::load_with_env(Some(env(&[])), Some("abc".into())).is_err());
        let vars = env(&[("TEXTOPS_OPERATION", "sentiment")]);
        assert!(ServerConfig::load_with_env(Some(vars), None).is_err());
        let vars = env(&[("TEXTOPS_TIMEOUT_SECS", "0")]);
        assert!(ServerConfig::load_with_env(Some(vars), None).is_err());
    }
}
