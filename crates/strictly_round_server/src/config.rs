//! Server configuration.
//!
//! Resolved in three layers: TOML file, then environment, then CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the bind host.
pub const HOST_ENV: &str = "STRICTLY_ROUND_HOST";
/// Environment variable overriding the bind port.
pub const PORT_ENV: &str = "STRICTLY_ROUND_PORT";
/// Environment variable enabling legality checks.
pub const STRICT_ENV: &str = "STRICTLY_ROUND_STRICT";

/// Configuration for the round server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    #[setters(into)]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Page title shown above the board.
    #[serde(default = "default_title")]
    #[setters(into)]
    title: String,

    /// Reject submissions that couldn't come from legal play.
    #[serde(default)]
    strict_legality: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_title() -> String {
    "Tic-tac-toe".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            title: default_title(),
            strict_legality: false,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise starts from defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    #[instrument(skip(self, lookup))]
    pub fn apply_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_ENV) {
            debug!(%host, "Host overridden by environment");
            self.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.port = port.parse().map_err(|_| {
                ConfigError::new(format!("{} is not a valid port: {:?}", PORT_ENV, port))
            })?;
            debug!(port = self.port, "Port overridden by environment");
        }

        if let Some(strict) = lookup(STRICT_ENV) {
            self.strict_legality = match strict.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(ConfigError::new(format!(
                        "{} must be a boolean, got {:?}",
                        STRICT_ENV, strict
                    )));
                }
            };
        }

        Ok(self)
    }

    /// Address the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
