//! # Scrollback
//!
//! Relevance search over the conversation history that Claude Code keeps under
//! `~/.claude/projects`. Every session file is a JSONL stream of messages;
//! scrollback walks the most recently used projects, scores each message
//! against a free-text query and returns the most useful past exchanges first.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scrollback::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConfigBuilder::new().build()?;
//!     let history = scrollback::init(config)?;
//!
//!     let hits = history
//!         .search(&SearchRequest::new("react hooks").with_limit(5))
//!         .await?;
//!
//!     for hit in hits {
//!         println!("{:>3}  {}", hit.score, hit.excerpt);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scoring
//!
//! The scorer in [`search`] is pure and synchronous. A query naming a specific
//! technology (a *core term*) rejects every message that never mentions it;
//! messages that pass the gate collect word, phrase, majority, supporting-term
//! and context bonuses. See [`search::RelevanceScorer`].
//!
//! ## Architecture
//!
//! - **search**: term classification, casing-aware matching, score composition
//! - **discovery**: async filesystem traversal of the Claude directory tree
//! - **history**: the search tool tying discovery and scoring together
//! - **config** / **logging**: layered configuration and `tracing` setup

pub mod config;
pub mod discovery;
pub mod history;
pub mod logging;
pub mod models;
pub mod search;
pub mod timeframe;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::init;

    pub use crate::config::{
        ConfigBuilder, ConfigLoader, LogFormat, LogLevel, ScanConfig, ScoringConfig,
        ScrollbackConfig,
    };

    pub use crate::discovery::{ClaudePaths, ConversationSource, FsConversationSource};
    pub use crate::history::{HistorySearch, SearchHit, SearchRequest, SessionSummary};
    pub use crate::models::{ConversationEntry, MessageBody, extract_content};
    pub use crate::search::{QueryWordClass, RelevanceScorer, ScoreBreakdown, TermClassifier};
    pub use crate::timeframe::{TimeFilter, Timeframe};

    pub use crate::{Result, ScrollbackError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for scrollback operations
#[derive(Debug, thiserror::Error)]
pub enum ScrollbackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Filesystem error that could not be recovered from
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON where a well-formed document was required
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty search query
    #[error("Search query cannot be empty. Provide a term like 'react hooks' or 'typescript migration'")]
    EmptyQuery,

    /// Unrecognised timeframe name
    #[error(
        "Invalid timeframe '{0}'. Use one of: today, yesterday, week, last-week, month, last-month"
    )]
    InvalidTimeframe(String),

    /// Claude directory not found
    #[error("Claude directory not found: {path}. Pass --claude-root or set SCROLLBACK_PATHS__CLAUDE_ROOT")]
    ClaudeRootNotFound { path: String },

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for ScrollbackError {
    fn from(err: crate::config::ConfigError) -> Self {
        ScrollbackError::Configuration(err.to_string())
    }
}

/// Result type for scrollback operations
pub type Result<T> = std::result::Result<T, ScrollbackError>;

/// Initialize scrollback with the provided configuration
///
/// Installs the logging subscriber (ignoring one that is already installed),
/// compiles the scoring configuration and wires the filesystem source rooted
/// at the configured Claude directory.
///
/// # Examples
///
/// ```no_run
/// use scrollback::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_claude_root("/home/me/.claude")
///         .with_log_level(LogLevel::Warn)
///         .build()?;
///
///     let history = scrollback::init(config)?;
///     # let _ = history;
///     Ok(())
/// }
/// ```
pub fn init(config: config::ScrollbackConfig) -> Result<history::HistorySearch> {
    let _ = logging::init(&config.logging);

    let paths = discovery::ClaudePaths::from_config(&config.paths);
    tracing::debug!(root = %paths.root().display(), "Using Claude directory");

    let source = discovery::FsConversationSource::new(paths, config.scan.clone());
    let history = history::HistorySearch::new(std::sync::Arc::new(source), &config)?;
    Ok(history)
}
