use clap::Parser;
use scrollback_cli::{Cli, configure_colors, output_error, run};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let output = cli.output;
    configure_colors();

    if let Err(e) = run(cli).await {
        output_error(&e, output);
        std::process::exit(1);
    }
}
