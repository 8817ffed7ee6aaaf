pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;

pub use args::{Cli, OutputFormat};
pub use context::{CliContext, load_config};
pub use output::{
    CliColors, configure_colors, error_code, error_json, format_error, format_success,
    format_warning, output_error, print_json,
};

use commands::Commands;
use handlers::*;

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> scrollback::Result<()> {
    match &cli.command {
        Commands::Version => {
            println!("scrollback v{}", scrollback::VERSION);
            return Ok(());
        }
        Commands::Completions(args) => {
            handle_completions_command(args);
            return Ok(());
        }
        Commands::Desktop => return handle_desktop_command(cli.output).await,
        _ => {}
    }

    let ctx = CliContext::new(&cli)?;
    match cli.command {
        Commands::Search(args) => handle_search_command(args, &ctx).await,
        Commands::Sessions(args) => handle_sessions_command(args, &ctx).await,
        Commands::Projects => handle_projects_command(&ctx).await,
        Commands::Plans => handle_plans_command(&ctx).await,
        Commands::Tasks => handle_tasks_command(&ctx).await,
        Commands::Docs => handle_docs_command(&ctx).await,
        Commands::Config => handle_config_command(&ctx),
        Commands::Version | Commands::Completions(_) | Commands::Desktop => Ok(()),
    }
}
