//! Candidate message supply for the history search.

use super::paths::ClaudePaths;
use super::projects::{SessionFile, find_jsonl_files, find_project_directories};
use super::worktree::expand_worktree_projects;
use crate::config::ScanConfig;
use crate::models::{ConversationEntry, parse_jsonl};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

/// Supplier of projects, sessions and session entries.
///
/// Implementations never fail: anything that cannot be read is reported as
/// empty and logged.
#[async_trait]
pub trait ConversationSource: Send + Sync + std::fmt::Debug {
    /// Up to `limit` project names, most recently active first.
    async fn projects(&self, limit: usize) -> Vec<String>;

    /// Up to `limit` session files of `project`, most recent first.
    async fn sessions(&self, project: &str, limit: usize) -> Vec<SessionFile>;

    /// Parsed entries of one session file.
    async fn read_entries(&self, session: &SessionFile) -> Vec<ConversationEntry>;
}

/// [`ConversationSource`] backed by a Claude directory on disk.
#[derive(Debug, Clone)]
pub struct FsConversationSource {
    paths: ClaudePaths,
    scan: ScanConfig,
}

impl FsConversationSource {
    pub fn new(paths: ClaudePaths, scan: ScanConfig) -> Self {
        Self { paths, scan }
    }

    pub fn paths(&self) -> &ClaudePaths {
        &self.paths
    }
}

#[async_trait]
impl ConversationSource for FsConversationSource {
    async fn projects(&self, limit: usize) -> Vec<String> {
        let mut projects = find_project_directories(&self.paths).await;
        projects.truncate(limit);
        expand_worktree_projects(projects, self.scan.expand_worktrees).await
    }

    async fn sessions(&self, project: &str, limit: usize) -> Vec<SessionFile> {
        let mut files = find_jsonl_files(&self.paths, project).await;
        files.truncate(limit);
        files
    }

    async fn read_entries(&self, session: &SessionFile) -> Vec<ConversationEntry> {
        match fs::read_to_string(&session.path).await {
            Ok(body) => {
                let entries = parse_jsonl(&body);
                debug!(path = %session.path.display(), entries = entries.len(), "Read session");
                entries
            }
            Err(e) => {
                warn!(path = %session.path.display(), error = %e, "Failed to read session file");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fs_source_respects_limits() {
        let dir = TempDir::new().unwrap();
        let paths = ClaudePaths::new(dir.path());
        for project in ["-a", "-b", "-c"] {
            for session in ["1", "2", "3"] {
                let file = paths.project_dir(project).join(format!("{session}.jsonl"));
                std::fs::create_dir_all(file.parent().unwrap()).unwrap();
                std::fs::write(&file, r#"{"type":"user","message":{"role":"user","content":"hi"}}"#)
                    .unwrap();
            }
        }

        let source = FsConversationSource::new(paths, ScanConfig::default());
        assert_eq!(source.projects(2).await.len(), 2);

        let sessions = source.sessions("-a", 2).await;
        assert_eq!(sessions.len(), 2);

        let entries = source.read_entries(&sessions[0]).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content(), "hi");
    }

    #[tokio::test]
    async fn test_unreadable_session_is_empty() {
        let source = FsConversationSource::new(ClaudePaths::new("/nowhere"), ScanConfig::default());
        let missing = SessionFile {
            project: "-x".to_string(),
            path: "/nowhere/projects/-x/gone.jsonl".into(),
            modified: None,
        };
        assert!(source.read_entries(&missing).await.is_empty());
    }
}
