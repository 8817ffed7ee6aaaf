//! Integration tests for the scrollback CLI
//!
//! These tests cover argument parsing, configuration layering, the JSON error
//! format and the project listing against a temporary Claude directory.

use clap::{CommandFactory, Parser};
use scrollback::ScrollbackError;
use scrollback::config::LogLevel;
use scrollback_cli::commands::Commands;
use scrollback_cli::handlers::sessions::list_projects;
use scrollback_cli::{Cli, CliContext, OutputFormat, error_code, error_json, load_config};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_search_with_global_flags() {
    let cli = Cli::try_parse_from([
        "scrollback",
        "search",
        "react hooks",
        "--timeframe",
        "week",
        "--limit",
        "3",
        "--explain",
        "--output",
        "json",
        "--claude-root",
        "/tmp/claude",
    ])
    .expect("Failed to parse arguments");

    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(cli.claude_root.as_deref(), Some(std::path::Path::new("/tmp/claude")));
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "react hooks");
            assert_eq!(args.timeframe.as_deref(), Some("week"));
            assert_eq!(args.limit, 3);
            assert!(args.explain);
            assert!(args.project.is_none());
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn test_search_requires_query() {
    assert!(Cli::try_parse_from(["scrollback", "search"]).is_err());
}

#[test]
fn test_load_config_applies_overrides() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = dir.path().join("scrollback.toml");
    fs::write(
        &file,
        "[scoring]\nexact_match_score = 12\n\n[scan]\nmax_projects_search = 4\n",
    )
    .expect("Failed to write config");

    let config = load_config(Some(&file), Some(dir.path()), Some("debug"))
        .expect("Failed to load config");

    assert_eq!(config.scoring.exact_match_score, 12);
    assert_eq!(config.scan.max_projects_search, 4);
    assert_eq!(config.paths.claude_root.as_deref(), Some(dir.path()));
    assert_eq!(config.logging.level, LogLevel::Debug);
}

#[test]
fn test_load_config_missing_file_is_an_error() {
    let result = load_config(Some(std::path::Path::new("/no/such/scrollback.toml")), None, None);
    assert!(matches!(result, Err(ScrollbackError::Configuration(_))));
}

#[test]
fn test_load_config_rejects_bad_log_level() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = dir.path().join("scrollback.json");
    fs::write(&file, "{}").expect("Failed to write config");

    let result = load_config(Some(&file), None, Some("loud"));
    assert!(matches!(result, Err(ScrollbackError::Logging(_))));
}

#[test]
fn test_error_json_shape() {
    let value = error_json(&ScrollbackError::EmptyQuery);
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "EMPTY_QUERY");
    assert!(value["message"].as_str().unwrap().contains("cannot be empty"));

    let missing = ScrollbackError::ClaudeRootNotFound {
        path: "/x".to_string(),
    };
    assert_eq!(error_code(&missing), "CLAUDE_ROOT_NOT_FOUND");
    assert_eq!(error_json(&missing)["details"]["path"], "/x");
}

#[tokio::test]
async fn test_project_listing() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let project = dir.path().join("projects").join("-home-me-web");
    fs::create_dir_all(&project).expect("Failed to create project");
    fs::write(project.join("a.jsonl"), "{}").expect("Failed to write session");
    fs::write(project.join("b.jsonl"), "{}").expect("Failed to write session");

    let config = load_config(
        Some(&write_empty_config(&dir)),
        Some(dir.path()),
        Some("error"),
    )
    .expect("Failed to load config");
    let ctx = CliContext::from_config(config, OutputFormat::Json).expect("Failed to build context");

    let rows = list_projects(&ctx).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "-home-me-web");
    assert_eq!(rows[0].path, "/home/me/web");
    assert_eq!(rows[0].sessions, 2);
}

fn write_empty_config(dir: &TempDir) -> std::path::PathBuf {
    let file = dir.path().join("empty.toml");
    fs::write(&file, "").expect("Failed to write config");
    file
}
