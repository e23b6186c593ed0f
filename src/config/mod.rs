//! Configuration loading and management for the vacation pay service.
//!
//! This module loads the service configuration (listen address and log level)
//! from a YAML file. Calculation limits and the holiday table are compiled in
//! and are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use vacation_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding to {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{LoggingConfig, ServerConfig, ServiceConfig};
