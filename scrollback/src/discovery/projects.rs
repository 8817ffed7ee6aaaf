//! Project, session and document enumeration.

use super::paths::{ClaudePaths, decode_project_path};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;
use tracing::{debug, warn};

/// Markdown categories searched globally and inside each project's `.claude/`.
const DOC_CATEGORIES: &[&str] = &["rules", "skills", "agents", "plans"];

/// A session JSONL file inside a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFile {
    /// Encoded project directory name
    pub project: String,
    pub path: PathBuf,
    /// Last modification time, `None` when the metadata could not be read
    pub modified: Option<SystemTime>,
}

impl SessionFile {
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified.map(DateTime::<Utc>::from)
    }

    /// File name without the `.jsonl` extension.
    pub fn session_id(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A markdown document tagged with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownFile {
    pub path: PathBuf,
    /// `global-<category>`, `project-<category>`, `global-claude-md` or `project-claude-md`
    pub category: String,
}

/// List a directory, returning `None` when it cannot be read.
async fn list_dir(dir: &Path) -> Option<Vec<PathBuf>> {
    let mut reader = match fs::read_dir(dir).await {
        Ok(reader) => reader,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return None;
        }
    };

    let mut entries = Vec::new();
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => entries.push(entry.path()),
            Ok(None) => break,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Stopped reading directory");
                break;
            }
        }
    }
    Some(entries)
}

async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    file_name(path).ends_with(suffix)
}

/// Most recently modified first; unknown times last, then by name.
fn sort_by_recency<T: Ord>(items: &mut [(T, Option<SystemTime>)]) {
    items.sort_by(|(a_key, a_time), (b_key, b_time)| {
        b_time.cmp(a_time).then_with(|| a_key.cmp(b_key))
    });
}

/// Project directory names under `projects/`, most recently modified first.
pub async fn find_project_directories(paths: &ClaudePaths) -> Vec<String> {
    let projects_dir = paths.projects_dir();
    let Some(entries) = list_dir(&projects_dir).await else {
        warn!(dir = %projects_dir.display(), "Claude projects directory is not readable");
        return Vec::new();
    };

    let mut dirs = Vec::new();
    for path in entries {
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => dirs.push((file_name(&path), meta.modified().ok())),
            Ok(_) => {}
            Err(e) => debug!(path = %path.display(), error = %e, "Skipping project entry"),
        }
    }

    sort_by_recency(&mut dirs);
    dirs.into_iter().map(|(name, _)| name).collect()
}

/// Session files of one project, most recently modified first.
pub async fn find_jsonl_files(paths: &ClaudePaths, project: &str) -> Vec<SessionFile> {
    let dir = paths.project_dir(project);
    let Some(entries) = list_dir(&dir).await else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for path in entries.into_iter().filter(|p| has_suffix(p, ".jsonl")) {
        let modified = match fs::metadata(&path).await {
            Ok(meta) => meta.modified().ok(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Session metadata unavailable");
                None
            }
        };
        files.push((path, modified));
    }

    sort_by_recency(&mut files);
    files
        .into_iter()
        .map(|(path, modified)| SessionFile {
            project: project.to_string(),
            path,
            modified,
        })
        .collect()
}

/// Every regular file below `dir`, sorted by path.
pub async fn walk_directory(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let Some(entries) = list_dir(&current).await else {
            continue;
        };
        for path in entries {
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_dir() => pending.push(path),
                Ok(meta) if meta.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => debug!(path = %path.display(), error = %e, "Skipping entry"),
            }
        }
    }

    files.sort();
    files
}

/// Markdown plans directly under `plans/`.
pub async fn find_plan_files(paths: &ClaudePaths) -> Vec<PathBuf> {
    let mut plans: Vec<PathBuf> = list_dir(&paths.plans_dir())
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|p| has_suffix(p, ".md"))
        .collect();
    plans.sort();
    plans
}

/// JSON task files anywhere below `tasks/`.
pub async fn find_task_files(paths: &ClaudePaths) -> Vec<PathBuf> {
    walk_directory(&paths.tasks_dir())
        .await
        .into_iter()
        .filter(|p| has_suffix(p, ".json"))
        .collect()
}

async fn collect_docs(base: &Path, scope: &str, out: &mut Vec<MarkdownFile>) {
    for category in DOC_CATEGORIES {
        let dir = base.join(category);
        if !exists(&dir).await {
            continue;
        }
        out.extend(
            walk_directory(&dir)
                .await
                .into_iter()
                .filter(|p| has_suffix(p, ".md"))
                .map(|path| MarkdownFile {
                    path,
                    category: format!("{scope}-{category}"),
                }),
        );
    }

    let claude_md = base.join("CLAUDE.md");
    if exists(&claude_md).await {
        out.push(MarkdownFile {
            path: claude_md,
            category: format!("{scope}-claude-md"),
        });
    }
}

/// Rules, skills, agents, plans and `CLAUDE.md`, globally and per project.
///
/// Project documents are looked up in `<decoded project path>/.claude/` for
/// every known project.
pub async fn find_markdown_files(paths: &ClaudePaths) -> Vec<MarkdownFile> {
    let mut docs = Vec::new();
    collect_docs(paths.root(), "global", &mut docs).await;

    for project in find_project_directories(paths).await {
        let project_claude = PathBuf::from(decode_project_path(&project)).join(".claude");
        if exists(&project_claude).await {
            collect_docs(&project_claude, "project", &mut docs).await;
        }
    }

    docs
}
