//! Well-known locations inside the Claude directory.

use crate::config::PathsConfig;
use std::path::{Path, PathBuf};

/// Root of a Claude directory tree (normally `~/.claude`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudePaths {
    root: PathBuf,
}

impl ClaudePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the root from configuration, defaulting to `~/.claude`.
    pub fn from_config(config: &PathsConfig) -> Self {
        Self::new(config.resolve_claude_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.root.join("projects")
    }

    pub fn plans_dir(&self) -> PathBuf {
        self.root.join("plans")
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    /// Directory holding the sessions of an encoded project name.
    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.projects_dir().join(project)
    }
}

/// Turn a project directory name back into the path it was created for.
///
/// The encoding is lossy: a `-` that was part of the original path decodes
/// to `/` as well.
pub fn decode_project_path(encoded: &str) -> String {
    encoded.replace('-', "/")
}

/// Encode an absolute path the way Claude names project directories.
pub fn encode_project_path(path: &str) -> String {
    path.replace('/', "-")
}
