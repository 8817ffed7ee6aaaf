use crate::args::{Cli, CompletionsArgs, OutputFormat};
use crate::context::CliContext;
use crate::output::{print_desktop, print_json};
use clap::CommandFactory;
use scrollback::discovery::detect_desktop;

pub async fn handle_desktop_command(output: OutputFormat) -> scrollback::Result<()> {
    let info = detect_desktop().await;
    if output.is_json() {
        print_json(&info);
    } else {
        print_desktop(&info);
    }
    Ok(())
}

pub fn handle_config_command(ctx: &CliContext) -> scrollback::Result<()> {
    let rendered = serde_json::to_string_pretty(&ctx.config)?;
    println!("{rendered}");
    Ok(())
}

pub fn handle_completions_command(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
}
