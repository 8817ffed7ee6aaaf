//! Filesystem discovery under the Claude directory
//!
//! Claude Code keeps one directory per project under `~/.claude/projects`,
//! named after the project's absolute path with `/` replaced by `-`, and one
//! JSONL file per session inside it. Plans, tasks and rule/skill markdown live
//! next to it.
//!
//! Every function in this module treats filesystem errors as "nothing here":
//! unreadable directories are logged and yield empty results instead of
//! failing the caller.

pub mod desktop;
pub mod paths;
pub mod projects;
pub mod source;
pub mod worktree;

pub use desktop::{
    DesktopInfo, desktop_config_dir, desktop_indexeddb_path, desktop_storage_path, detect_desktop,
};
pub use paths::{ClaudePaths, decode_project_path, encode_project_path};
pub use projects::{
    MarkdownFile, SessionFile, find_jsonl_files, find_markdown_files, find_plan_files,
    find_project_directories, find_task_files, walk_directory,
};
pub use source::{ConversationSource, FsConversationSource};
pub use worktree::{expand_worktree_projects, is_git_worktree, parent_project_from_worktree};
