//! Command handlers for the scrollback CLI

pub mod files;
pub mod search;
pub mod sessions;
pub mod system;

pub use files::{handle_docs_command, handle_plans_command, handle_tasks_command};
pub use search::handle_search_command;
pub use sessions::{handle_projects_command, handle_sessions_command};
pub use system::{handle_completions_command, handle_config_command, handle_desktop_command};
