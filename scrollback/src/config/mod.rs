//! Configuration system for scrollback.
//!
//! Configuration is layered with figment: compiled-in defaults, then an
//! optional file (TOML, YAML or JSON), then `SCROLLBACK_` environment
//! variables. Nested keys use a double underscore, e.g.
//! `SCROLLBACK_SCORING__EXACT_MATCH_SCORE=12`.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use crate::search::ScoringConfig;
pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "scrollback.toml",
    "scrollback.yaml",
    "scrollback.yml",
    "scrollback.json",
    ".scrollback/config.toml",
    ".scrollback/config.yaml",
    ".scrollback/config.yml",
    ".scrollback/config.json",
];

/// Environment variable prefix for scrollback configuration
pub const ENV_PREFIX: &str = "SCROLLBACK_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during environment loading
    #[error("Failed to load environment variables: {0}")]
    EnvLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),

    /// The core term recognizer did not compile
    #[error("Invalid core term pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// General error
    #[error("{0}")]
    Other(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
