//! Process-level runtime support shared by the server binary: layered
//! configuration loading and tracing bootstrap.

pub mod config;
pub mod logging;

pub use config::{
    default_logging_config, AppConfig, CliArgs, DatabaseConfig, LoggingConfig, Section,
    ServerConfig,
};
