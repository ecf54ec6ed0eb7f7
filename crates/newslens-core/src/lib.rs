//! Shared domain types and configuration for the newslens workspace.

use thiserror::Error;

mod app_config;
mod articles;
mod config;

pub use app_config::{AppConfig, DataSource, Environment};
pub use articles::{Article, Genre};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
