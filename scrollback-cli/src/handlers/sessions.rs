use crate::args::SessionsArgs;
use crate::context::CliContext;
use crate::output::{format_warning, print_json, print_sessions};
use colored::*;
use scrollback::discovery::{decode_project_path, find_jsonl_files};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectRow {
    pub name: String,
    pub path: String,
    pub sessions: usize,
}

pub async fn handle_sessions_command(
    args: SessionsArgs,
    ctx: &CliContext,
) -> scrollback::Result<()> {
    let sessions = ctx.history.recent_sessions(args.limit).await;

    if ctx.output.is_json() {
        print_json(&sessions);
    } else {
        print_sessions(&sessions);
    }
    Ok(())
}

pub async fn list_projects(ctx: &CliContext) -> Vec<ProjectRow> {
    let mut rows = Vec::new();
    for name in ctx.history.projects().await {
        let sessions = find_jsonl_files(&ctx.paths, &name).await.len();
        rows.push(ProjectRow {
            path: decode_project_path(&name),
            name,
            sessions,
        });
    }
    rows
}

pub async fn handle_projects_command(ctx: &CliContext) -> scrollback::Result<()> {
    let rows = list_projects(ctx).await;

    if ctx.output.is_json() {
        print_json(&rows);
    } else if rows.is_empty() {
        println!("{}", format_warning("No projects found"));
    } else {
        for row in &rows {
            println!(
                "{:<50} {}",
                row.path.bold(),
                format!("{} sessions", row.sessions).dimmed()
            );
        }
    }
    Ok(())
}
