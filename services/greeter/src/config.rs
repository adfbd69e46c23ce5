use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

use greeter_core::config::Config;
use greeter_core::tracing::LogFormat;

const DEFAULT_PORT: u16 = 8080;

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Greeter service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GreeterConfig {
    /// TCP port to listen on (default 8080). Env var: `FUNCTIONS_CUSTOMHANDLER_PORT`,
    /// set by the Functions host for custom handlers.
    #[serde(rename = "functions_customhandler_port", default = "default_port")]
    pub port: u16,
    /// Stdout log format, `text` or `json` (default `text`). Env var: `LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config for GreeterConfig {}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl GreeterConfig {
    /// All interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
