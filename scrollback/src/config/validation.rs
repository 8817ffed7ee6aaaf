//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &ScrollbackConfig) -> Result<(), ConfigError> {
    config.scoring.validate()?;

    validate_scan_config(&config.scan)?;
    validate_paths_config(&config.paths)?;

    Ok(())
}

/// Validate scan limits.
fn validate_scan_config(config: &ScanConfig) -> Result<(), ConfigError> {
    let caps = [
        ("max_projects_search", config.max_projects_search),
        (
            "max_files_per_project_search",
            config.max_files_per_project_search,
        ),
        ("max_projects_sessions", config.max_projects_sessions),
        (
            "max_files_per_project_sessions",
            config.max_files_per_project_sessions,
        ),
        ("concurrency", config.concurrency),
    ];

    for (name, value) in caps {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "scan.{} must be greater than 0",
                name
            )));
        }
    }

    Ok(())
}

/// Validate filesystem locations.
fn validate_paths_config(config: &PathsConfig) -> Result<(), ConfigError> {
    if let Some(root) = &config.claude_root
        && root.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Claude root directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}
