use crate::error::ConfigError;
use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in the file; missing values take the defaults
/// below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

/// Contains parameters for the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host name or IP address to bind (e.g., "127.0.0.1").
    pub host: String,
    pub port: u16,
    /// The largest request body accepted, in bytes.
    pub body_limit_bytes: usize,
}

/// Contains the origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    /// Exact origins such as "http://localhost:3000". A single "*" allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive (e.g., "info" or "finlens=debug,tower_http=info").
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5272,
            body_limit_bytes: 64 * 1024,
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Settings {
    /// Checks the values serde cannot: ports, limits and origin syntax.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.body_limit_bytes must be greater than 0".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        for origin in &self.cors.allowed_origins {
            if !is_valid_origin(origin) {
                return Err(ConfigError::ValidationError(format!(
                    "cors.allowed_origins contains an invalid origin: '{}'",
                    origin
                )));
            }
        }
        Ok(())
    }
}

impl CorsSettings {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

impl ServerSettings {
    /// Resolves `host:port` to the first matching socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| {
                ConfigError::ValidationError(format!(
                    "cannot resolve {}:{}: {}",
                    self.host, self.port, e
                ))
            })?
            .next()
            .ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "{}:{} did not resolve to any address",
                    self.host, self.port
                ))
            })
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, overrides: &ServerOverrides) {
        if let Some(host) = &overrides.host {
            self.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
    }
}

/// Server values that may be overridden from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct ServerOverrides {
    /// Host to bind, overriding `server.host`.
    #[cfg_attr(feature = "clap", arg(long))]
    pub host: Option<String>,
    /// Port to bind, overriding `server.port`.
    #[cfg_attr(feature = "clap", arg(long))]
    pub port: Option<u16>,
}

/// An origin is "*" or a scheme and host with no path, e.g. "https://app.example.com".
fn is_valid_origin(origin: &str) -> bool {
    if origin == "*" {
        return true;
    }
    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"));
    match rest {
        Some(authority) => {
            !authority.is_empty()
                && !authority.contains('/')
                && !authority.chars().any(|c| c.is_whitespace())
        }
        None => false,
    }
}
