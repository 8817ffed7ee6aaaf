//! Configuration model definitions.
//!
//! This module contains the configuration structures for all scrollback components.

use crate::search::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for scrollback.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScrollbackConfig {
    /// Relevance scoring weights and vocabularies
    pub scoring: ScoringConfig,

    /// Caps on how much of the history tree is scanned
    pub scan: ScanConfig,

    /// Location of the Claude directory
    pub paths: PathsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Scan limits for the traversal of the Claude projects directory.
///
/// Projects and session files are visited most recently modified first, so
/// the caps trade recall on old conversations for latency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Projects visited by a search
    pub max_projects_search: usize,

    /// Session files read per project by a search
    pub max_files_per_project_search: usize,

    /// Projects visited when listing recent sessions
    pub max_projects_sessions: usize,

    /// Session files listed per project when listing recent sessions
    pub max_files_per_project_sessions: usize,

    /// Session files read concurrently
    pub concurrency: usize,

    /// Also search the parent project of git worktree checkouts
    pub expand_worktrees: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_projects_search: 30,
            max_files_per_project_search: 15,
            max_projects_sessions: 30,
            max_files_per_project_sessions: 15,
            concurrency: 8,
            expand_worktrees: false,
        }
    }
}

/// Filesystem locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Claude directory (defaults to `~/.claude`)
    pub claude_root: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve the Claude directory, falling back to `~/.claude`.
    pub fn resolve_claude_root(&self) -> PathBuf {
        match &self.claude_root {
            Some(root) => root.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".claude"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to the console (stderr)
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Default,
            file: None,
            console: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Default => write!(f, "default"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(LogFormat::Default),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}
