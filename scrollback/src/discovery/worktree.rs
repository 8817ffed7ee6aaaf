//! Git worktree detection.
//!
//! A worktree checkout has a `.git` *file* pointing at
//! `<parent>/.git/worktrees/<name>`. Sessions run inside a worktree live in
//! their own project directory, so expansion adds the parent project to the
//! set of projects searched.

use super::paths::{decode_project_path, encode_project_path};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

lazy_static! {
    static ref GITDIR_RE: Regex = Regex::new(r"gitdir:\s*(.+)").unwrap();
    static ref WORKTREE_SUFFIX_RE: Regex = Regex::new(r"/?\.git/worktrees/.+$").unwrap();
}

fn checkout_path(project: &str) -> PathBuf {
    PathBuf::from(decode_project_path(project))
}

/// Parent checkout path named by the contents of a worktree's `.git` file.
pub fn parse_gitdir(contents: &str) -> Option<String> {
    let gitdir = GITDIR_RE.captures(contents)?.get(1)?.as_str().trim();
    let parent = WORKTREE_SUFFIX_RE.replace(gitdir, "");
    let parent = parent.trim();
    if parent.is_empty() {
        None
    } else {
        Some(parent.to_string())
    }
}

/// Whether the checkout at `path` is a worktree (its `.git` is a file).
pub async fn is_worktree_checkout(path: &Path) -> bool {
    fs::metadata(path.join(".git"))
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Encoded parent project of the worktree checkout at `path`.
pub async fn parent_project_of_checkout(path: &Path) -> Option<String> {
    let contents = match fs::read_to_string(path.join(".git")).await {
        Ok(contents) => contents,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No readable .git file");
            return None;
        }
    };
    parse_gitdir(&contents).map(|parent| encode_project_path(&parent))
}

/// Whether the encoded project was created from a git worktree.
pub async fn is_git_worktree(project: &str) -> bool {
    is_worktree_checkout(&checkout_path(project)).await
}

/// Encoded project name of the worktree's parent repository.
pub async fn parent_project_from_worktree(project: &str) -> Option<String> {
    parent_project_of_checkout(&checkout_path(project)).await
}

/// Add the parent project of every worktree project.
///
/// Returns `projects` unchanged unless `enabled`. Parents are appended after
/// the original projects, each at most once.
pub async fn expand_worktree_projects(projects: Vec<String>, enabled: bool) -> Vec<String> {
    if !enabled {
        return projects;
    }

    let mut expanded = projects.clone();
    for project in &projects {
        if !is_git_worktree(project).await {
            continue;
        }
        if let Some(parent) = parent_project_from_worktree(project).await
            && parent != *project
            && !expanded.contains(&parent)
        {
            debug!(worktree = %project, parent = %parent, "Adding worktree parent project");
            expanded.push(parent);
        }
    }
    expanded
}
