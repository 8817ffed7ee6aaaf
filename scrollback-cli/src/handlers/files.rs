use crate::context::CliContext;
use crate::output::{print_docs, print_json, print_paths};
use scrollback::discovery::{find_markdown_files, find_plan_files, find_task_files};

pub async fn handle_plans_command(ctx: &CliContext) -> scrollback::Result<()> {
    let plans = find_plan_files(&ctx.paths).await;
    if ctx.output.is_json() {
        print_json(&plans);
    } else {
        print_paths("plans", &plans);
    }
    Ok(())
}

pub async fn handle_tasks_command(ctx: &CliContext) -> scrollback::Result<()> {
    let tasks = find_task_files(&ctx.paths).await;
    if ctx.output.is_json() {
        print_json(&tasks);
    } else {
        print_paths("tasks", &tasks);
    }
    Ok(())
}

pub async fn handle_docs_command(ctx: &CliContext) -> scrollback::Result<()> {
    let docs = find_markdown_files(&ctx.paths).await;
    if ctx.output.is_json() {
        print_json(&docs);
    } else {
        print_docs(&docs);
    }
    Ok(())
}
