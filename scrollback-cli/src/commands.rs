//! Command enum definitions

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Search past conversations
    #[command(
        alias = "find",
        long_about = r#"
Rank messages from your most recently used projects by relevance to a query.

HOW SCORING WORKS:
  • Technology names in the query (react, postgres, docker...) must appear in
    a message, otherwise the message is dropped
  • Other words, the exact phrase and matching most of the query add points
  • Tool calls, file references and the --project path add context bonuses

Casing matters only for odd spellings: "React", "REACT" and "react" match
react, "ReAct" does not.

EXAMPLES:
  scrollback search "react hooks"
  scrollback search "typescript migration" --timeframe week
  scrollback search "connection pool" --project /home/me/api --explain
  scrollback search docker --output json
"#
    )]
    Search(SearchArgs),

    /// List the most recent sessions
    Sessions(SessionsArgs),

    /// List project directories, most recently active first
    Projects,

    /// List plan files
    Plans,

    /// List task files
    Tasks,

    /// List rules, skills, agents, plans and CLAUDE.md files
    Docs,

    /// Detect a Claude Desktop installation
    Desktop,

    /// Print the effective configuration
    Config,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),

    /// Display version information
    Version,
}
