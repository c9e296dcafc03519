//! Core functionality for Pets Explorer.
//!
//! This crate provides the configuration, error and logging plumbing shared
//! by the catalog aggregator and the web service.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LoggingConfig, ProviderConfig, ServerConfig};
pub use error::{ConfigError, Result};
