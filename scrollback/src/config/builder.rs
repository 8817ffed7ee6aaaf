//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::search::ScoringConfig;
use std::path::Path;

/// Builder for creating ScrollbackConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ScrollbackConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ScrollbackConfig::default(),
        }
    }

    /// Start from an existing configuration, e.g. one produced by [`super::ConfigLoader`].
    pub fn from_config(config: ScrollbackConfig) -> Self {
        Self { config }
    }

    /// Set the Claude directory to scan.
    pub fn with_claude_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.paths.claude_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Replace the core term recognizer.
    pub fn with_core_term_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.scoring.core_term_pattern = pattern.into();
        self
    }

    /// Add words that never earn supporting-term credit.
    pub fn with_generic_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .scoring
            .generic_terms
            .extend(terms.into_iter().map(Into::into));
        self
    }

    /// Set the number of projects and files per project a search visits.
    pub fn with_search_limits(mut self, max_projects: usize, max_files_per_project: usize) -> Self {
        self.config.scan.max_projects_search = max_projects;
        self.config.scan.max_files_per_project_search = max_files_per_project;
        self
    }

    /// Set the number of projects and files per project a session listing visits.
    pub fn with_session_limits(mut self, max_projects: usize, max_files_per_project: usize) -> Self {
        self.config.scan.max_projects_sessions = max_projects;
        self.config.scan.max_files_per_project_sessions = max_files_per_project;
        self
    }

    /// Set how many session files are read concurrently.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.scan.concurrency = concurrency;
        self
    }

    /// Also search parent projects of git worktrees.
    pub fn with_worktree_expansion(mut self, enabled: bool) -> Self {
        self.config.scan.expand_worktrees = enabled;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file instead of stderr.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.console = false;
        self
    }

    /// Configuration suited to tests: quiet logging, small scan caps.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Error)
            .with_search_limits(5, 5)
            .with_session_limits(5, 5)
            .with_concurrency(2)
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ScrollbackConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
