use colored::*;
use scrollback::ScrollbackError;
use scrollback::discovery::{DesktopInfo, MarkdownFile};
use scrollback::history::{SearchHit, SessionSummary};
use scrollback::search::CoreGate;
use scrollback::timeframe::format_timestamp;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use crate::args::OutputFormat;

pub struct CliColors;

impl CliColors {
    pub fn success() -> Color {
        Color::TrueColor {
            r: 34,
            g: 197,
            b: 94,
        }
    }

    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }
}

/// Disable colors when stdout is not a terminal.
pub fn configure_colors() {
    use is_terminal::IsTerminal;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Stable machine-readable code for an error.
pub fn error_code(error: &ScrollbackError) -> &'static str {
    match error {
        ScrollbackError::Configuration(_) => "CONFIGURATION_ERROR",
        ScrollbackError::Logging(_) => "LOGGING_ERROR",
        ScrollbackError::Io(_) => "IO_ERROR",
        ScrollbackError::Json(_) => "JSON_ERROR",
        ScrollbackError::EmptyQuery => "EMPTY_QUERY",
        ScrollbackError::InvalidTimeframe(_) => "INVALID_TIMEFRAME",
        ScrollbackError::ClaudeRootNotFound { .. } => "CLAUDE_ROOT_NOT_FOUND",
        ScrollbackError::Other(_) => "OTHER_ERROR",
    }
}

pub fn error_json(error: &ScrollbackError) -> serde_json::Value {
    let mut response = json!({
        "error": true,
        "code": error_code(error),
        "message": error.to_string(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });
    if let ScrollbackError::ClaudeRootNotFound { path } = error {
        response["details"] = json!({ "path": path });
    }
    response
}

/// Report an error on stderr in the selected format.
pub fn output_error(error: &ScrollbackError, output: OutputFormat) {
    if output.is_json() {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_json(error)).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn format_success(msg: &str) -> String {
    format!(
        "{} {}",
        "✓".color(CliColors::success()).bold(),
        msg.color(CliColors::success())
    )
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

fn format_score(score: u32) -> ColoredString {
    format!("{score:>3}").color(CliColors::accent()).bold()
}

fn display_timestamp(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(raw) => format_timestamp(raw).unwrap_or_else(|| raw.to_string()),
        None => "unknown time".to_string(),
    }
}

pub fn print_hits(query: &str, hits: &[SearchHit], explain: bool) {
    if hits.is_empty() {
        println!("{}", format_warning(&format!("No messages found matching '{query}'")));
        return;
    }

    println!("Found {} messages matching '{}':\n", hits.len(), query);
    for (i, hit) in hits.iter().enumerate() {
        let when = display_timestamp(hit.timestamp.as_deref());
        let role = hit.role.as_deref().unwrap_or("message");
        println!(
            "{}. [{}] {} {}",
            i + 1,
            format_score(hit.score),
            role.bold(),
            format!("{} · {}", hit.project, when).color(CliColors::muted())
        );
        println!("   {}", hit.excerpt);

        if explain {
            let gate = match hit.breakdown.gate {
                CoreGate::Rejected => "rejected".to_string(),
                CoreGate::Scored(points) => points.to_string(),
            };
            println!(
                "   {}",
                format!(
                    "terms {} + supporting {} + tool {} + file {} + project {}",
                    gate,
                    hit.breakdown.supporting,
                    hit.breakdown.tool_usage,
                    hit.breakdown.file_reference,
                    hit.breakdown.project_match
                )
                .color(CliColors::muted())
            );
        }
        println!();
    }
}

pub fn print_sessions(sessions: &[SessionSummary]) {
    if sessions.is_empty() {
        println!("{}", format_warning("No sessions found"));
        return;
    }

    for session in sessions {
        let modified = session
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "{} {} {}",
            modified.color(CliColors::accent()),
            session.project.bold(),
            format!("({} messages)", session.message_count).color(CliColors::muted())
        );
        if let Some(first) = &session.first_message {
            println!("   {first}");
        }
    }
}

pub fn print_paths(title: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        println!("{}", format_warning(&format!("No {title} found")));
        return;
    }

    println!("{} ({}):", title.bold(), paths.len());
    for path in paths {
        println!("  {}", path.display());
    }
}

pub fn print_docs(docs: &[MarkdownFile]) {
    if docs.is_empty() {
        println!("{}", format_warning("No Claude documents found"));
        return;
    }

    for doc in docs {
        println!(
            "{:<20} {}",
            doc.category.color(CliColors::accent()),
            doc.path.display()
        );
    }
}

pub fn print_desktop(info: &DesktopInfo) {
    let Some(dir) = &info.config_dir else {
        println!("{}", format_warning("Claude Desktop is not supported on this platform"));
        return;
    };

    if info.detected {
        println!("{}", format_success(&format!("Claude Desktop found at {}", dir.display())));
    } else {
        println!(
            "{}",
            format_warning(&format!("Claude Desktop not found at {}", dir.display()))
        );
    }
    let show = |label: &str, path: &Option<PathBuf>| match path {
        Some(path) => println!("  {label:<12} {}", path.display()),
        None => println!("  {label:<12} {}", "-".color(CliColors::muted())),
    };
    show("Storage", &info.storage_path);
    show("IndexedDB", &info.indexeddb_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_timestamp_normalizes_to_utc() {
        assert_eq!(
            display_timestamp(Some("2025-06-01T10:00:00+02:00")),
            "2025-06-01T08:00:00.000Z"
        );
        assert_eq!(display_timestamp(Some("last tuesday")), "last tuesday");
        assert_eq!(display_timestamp(None), "unknown time");
    }
}
