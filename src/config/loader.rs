//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::Level;

use crate::error::{VacationError, VacationResult};

use super::types::{ServerConfig, ServiceConfig};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "VACATION_PAY_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:          # optional
///   level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Listening on {}", loader.server().bind_address());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
    log_level: Level,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file cannot be read
    /// - The file contains invalid YAML or is missing a required field
    /// - The log level is not a recognised level name
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vacation_pay::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/service.yaml")?;
    /// # Ok::<(), vacation_pay::error::VacationError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> VacationResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| VacationError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Loads configuration from the file named by `VACATION_PAY_CONFIG`,
    /// falling back to [`DEFAULT_CONFIG_PATH`].
    pub fn from_env() -> VacationResult<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` is used only in error messages.
    pub fn from_yaml(content: &str, origin: &str) -> VacationResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| VacationError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let log_level = Level::from_str(&config.logging.level).map_err(|_| {
            VacationError::ConfigParseError {
                path: origin.to_string(),
                message: format!("unknown log level '{}'", config.logging.level),
            }
        })?;

        Ok(Self { config, log_level })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the configured maximum log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}
