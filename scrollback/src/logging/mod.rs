//! Structured logging infrastructure for scrollback.
//!
//! This module provides a configurable logging system based on the tracing crate,
//! supporting different output formats and log levels. Console output goes to
//! stderr so that command output on stdout stays machine readable.


use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking file writer flushing for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),

    /// General error
    Other(String),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Where formatted events go.
enum Sink {
    File(NonBlocking),
    Stderr,
    Off,
}

fn open_sink(config: &LoggingConfig) -> Result<Sink> {
    match &config.file {
        Some(path) => Ok(Sink::File(create_non_blocking_file(path)?)),
        None if config.console => Ok(Sink::Stderr),
        None => Ok(Sink::Off),
    }
}

/// Finish a subscriber builder against a [`Sink`] and install it globally.
macro_rules! install {
    ($builder:expr, $sink:expr) => {
        match $sink {
            Sink::File(writer) => $builder.with_ansi(false).with_writer(writer).try_init(),
            Sink::Stderr => $builder.with_writer(std::io::stderr).try_init(),
            Sink::Off => Ok(()),
        }
    };
}

/// Initialize the logging system with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(to_tracing_level(config.level));
    let sink = open_sink(config)?;

    let result = match config.format {
        LogFormat::Json => install!(
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_line_number(true),
            sink
        ),
        LogFormat::Compact => install!(
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .with_line_number(true),
            sink
        ),
        LogFormat::Pretty => install!(
            tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_line_number(true),
            sink
        ),
        LogFormat::Default => install!(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false),
            sink
        ),
    };

    match result {
        // a subscriber installed by the host application wins
        Err(e) if e.to_string().contains("already") => Ok(()),
        other => other.map_err(LogError::from),
    }
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<NonBlocking> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| LogError::Other(format!("Not a file path: {}", path.display())))?;

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        file_name,
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    Ok(non_blocking)
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse::<LogLevel>()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
            LogError::Other(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for LogError {}
