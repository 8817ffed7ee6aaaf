//! End-to-end tests for the history search against a Claude directory on disk
//!
//! Each test builds a throwaway `~/.claude` tree with project directories and
//! session JSONL files, then drives the public API through `scrollback::init`.

use scrollback::discovery::{self, ClaudePaths};
use scrollback::prelude::*;
use serde_json::json;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn line(entry_type: &str, content: serde_json::Value, timestamp: &str, cwd: &str) -> String {
    json!({
        "type": entry_type,
        "sessionId": "s",
        "cwd": cwd,
        "timestamp": timestamp,
        "message": { "role": entry_type, "content": content }
    })
    .to_string()
}

fn write_session(root: &Path, project: &str, session: &str, lines: &[String], mtime_secs: u64) {
    let dir = root.join("projects").join(project);
    std::fs::create_dir_all(&dir).expect("Failed to create project dir");
    let file = dir.join(format!("{session}.jsonl"));
    std::fs::write(&file, lines.join("\n")).expect("Failed to write session");

    let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(mtime_secs);
    std::fs::File::open(&file)
        .and_then(|f| f.set_modified(mtime))
        .expect("Failed to set mtime");
    std::fs::File::open(&dir)
        .and_then(|f| f.set_modified(mtime))
        .expect("Failed to set dir mtime");
}

fn setup() -> (TempDir, HistorySearch) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let root = dir.path();

    write_session(
        root,
        "-home-me-web",
        "older",
        &[
            line("user", json!("How do I memoize React hooks?"), "2025-01-01T10:00:00Z", "/home/me/web"),
            line(
                "assistant",
                json!([
                    { "type": "text", "text": "Wrap the callback in useCallback inside src/App.tsx" },
                    { "type": "tool_use", "name": "Edit" }
                ]),
                "2025-01-01T10:01:00Z",
                "/home/me/web",
            ),
        ],
        1_000,
    );
    write_session(
        root,
        "-home-me-web",
        "newer",
        &[
            "this line is not json".to_string(),
            line("user", json!("Reading the ReAct paper tonight"), "2025-01-05T10:00:00Z", "/home/me/web"),
        ],
        2_000,
    );
    write_session(
        root,
        "-home-me-api",
        "only",
        &[line(
            "user",
            json!("Tune the postgres connection pool"),
            "2025-01-03T10:00:00Z",
            "/home/me/api",
        )],
        3_000,
    );

    let config = ConfigBuilder::testing()
        .with_claude_root(root)
        .build()
        .expect("Failed to build config");
    let history = scrollback::init(config).expect("Failed to init");
    (dir, history)
}

#[tokio::test]
async fn test_search_finds_technology_mentions() {
    let (_dir, history) = setup();

    let hits = history
        .search(&SearchRequest::new("react hooks"))
        .await
        .expect("Search failed");

    assert_eq!(hits.len(), 1, "only the message naming React should match");
    assert_eq!(hits[0].project, "/home/me/web");
    assert!(hits[0].excerpt.contains("memoize React hooks"));
    assert!(hits[0].session_file.ends_with("older.jsonl"));
}

#[tokio::test]
async fn test_mixed_case_collision_is_not_a_hit() {
    let (_dir, history) = setup();

    let hits = history
        .search(&SearchRequest::new("react"))
        .await
        .expect("Search failed");

    assert!(hits.iter().all(|h| !h.excerpt.contains("ReAct")));
}

#[tokio::test]
async fn test_project_bonus_raises_score() {
    let (_dir, history) = setup();

    let plain = history
        .search(&SearchRequest::new("postgres"))
        .await
        .expect("Search failed");
    let scoped = history
        .search(&SearchRequest::new("postgres").with_project("/home/me/api"))
        .await
        .expect("Search failed");

    assert_eq!(plain.len(), 1);
    assert_eq!(scoped[0].score, plain[0].score + 5);
    assert_eq!(scoped[0].breakdown.project_match, 5);
}

#[tokio::test]
async fn test_supporting_only_query_matches_tool_messages() {
    let (_dir, history) = setup();

    let hits = history
        .search(&SearchRequest::new("usecallback"))
        .await
        .expect("Search failed");

    // "useCallback" has interior capitals: no word credit, but the
    // lowercased substring still earns the phrase bonus
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].role.as_deref(), Some("assistant"));
    assert_eq!(hits[0].breakdown.file_reference, 3);
}

#[tokio::test]
async fn test_timeframe_excludes_old_messages() {
    let (_dir, history) = setup();

    let hits = history
        .search(&SearchRequest::new("postgres").with_timeframe("today"))
        .await
        .expect("Search failed");

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_recent_sessions_ordered_by_mtime() {
    let (_dir, history) = setup();

    let sessions = history.recent_sessions(10).await;
    let ids: Vec<_> = sessions.iter().map(|s| s.session_id.as_str()).collect();

    assert_eq!(ids, vec!["only", "newer", "older"]);
    assert_eq!(sessions[1].message_count, 1);
    assert_eq!(sessions[2].message_count, 2);
}

#[tokio::test]
async fn test_projects_listing() {
    let (dir, history) = setup();

    assert_eq!(history.projects().await, vec!["-home-me-api", "-home-me-web"]);

    let paths = ClaudePaths::new(dir.path());
    let files = discovery::find_jsonl_files(&paths, "-home-me-web").await;
    assert_eq!(files.len(), 2);
}

#[tokio::test]
async fn test_missing_root_returns_no_hits() {
    let config = ConfigBuilder::testing()
        .with_claude_root("/no/such/claude/dir")
        .build()
        .expect("Failed to build config");
    let history = scrollback::init(config).expect("Failed to init");

    let hits = history
        .search(&SearchRequest::new("react"))
        .await
        .expect("Search failed");
    assert!(hits.is_empty());
}
