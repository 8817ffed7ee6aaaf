//! Command argument structures

use crate::commands::Commands;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrollback")]
#[command(about = "Search your Claude conversation history", long_about = None)]
#[command(version = scrollback::VERSION)]
pub struct Cli {
    /// Configuration file (toml, yaml or json)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Claude directory to read instead of ~/.claude
    #[arg(long, global = true)]
    pub claude_root: Option<PathBuf>,

    /// Output format - use json for tool integration
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        *self == OutputFormat::Json
    }
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query, e.g. "react hooks"
    pub query: String,

    /// Project path credited when it appears in a message's working directory
    #[arg(long, short)]
    pub project: Option<String>,

    /// today, yesterday, week, last-week, month or last-month
    #[arg(long, short)]
    pub timeframe: Option<String>,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Show how each score was composed
    #[arg(long)]
    pub explain: bool,
}

#[derive(Args)]
pub struct SessionsArgs {
    /// Maximum number of sessions
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
