//! Configuration loading and constants.
//!
//! The service runs with no configuration at all: every field has a default
//! that matches the fixed contract (all interfaces, port 8080, text logs).
//! An optional TOML file can override the listen address and log format.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use const_format::formatcp;
use serde::Deserialize;

// =============================================================================
// Listener Defaults
// =============================================================================

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Default listen address, as shown in `--help`
pub const DEFAULT_LISTEN_ADDR: &str = formatcp!("{}:{}", DEFAULT_HOST, DEFAULT_PORT);

// =============================================================================
// Response Constants
// =============================================================================

/// Status value reported by healthy responses
pub const STATUS_OK: &str = "ok";

/// Status value reported by error responses
pub const STATUS_ERROR: &str = "error";

/// Human-readable message in the health payload
pub const HEALTH_MESSAGE: &str = "Server is healthy and running";

/// Reply carried by the ping payload
pub const PING_MESSAGE: &str = "pong";

/// Health probes must never be answered from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "heartbeat=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    /// Resolve host and port into a socket address.
    ///
    /// `host` is an IP literal; IPv6 may be written with or without brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self
            .host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.host);

        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|e| {
                ConfigError::Validation(format!("Invalid http.host '{}': {}", self.host, e))
            })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        match config.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown logging.format '{}', expected \"text\" or \"json\"",
                    other
                )))
            }
        }

        // Surface a bad address at load time rather than at bind time
        config.http.socket_addr()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_listen_on_all_interfaces_port_8080() {
        let config = AppConfig::load_or_default(None).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(
            config.http.socket_addr().unwrap().to_string(),
            DEFAULT_LISTEN_ADDR
        );
        assert!(!config.logging.is_json());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn overrides_are_applied() {
        let file = write_config(
            r#"
[http]
host = "127.0.0.1"
port = 9090

[logging]
format = "json"
"#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
        assert!(config.logging.is_json());
    }

    #[test]
    fn partial_http_section_keeps_default_port() {
        let file = write_config("[http]\nhost = \"127.0.0.1\"\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, DEFAULT_PORT);
    }

    #[test]
    fn ipv6_hosts_are_accepted() {
        for host in ["::", "[::1]"] {
            let file = write_config(&format!("[http]\nhost = \"{}\"\nport = 9090\n", host));
            let config = AppConfig::load(file.path()).unwrap();
            let addr = config.http.socket_addr().unwrap();
            assert!(addr.is_ipv6(), "host {}", host);
            assert_eq!(addr.port(), 9090);
        }
        let config = HttpServerConfig {
            host: "::1".to_string(),
            port: 8080,
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:8080");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load("/nonexistent/heartbeat.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let file = write_config("[http\nport = 1");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let file = write_config("[http]\nhost = \"not a host\"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
