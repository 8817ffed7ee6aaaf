use crate::args::{Cli, OutputFormat};
use scrollback::config::{ConfigLoader, ScrollbackConfig};
use scrollback::discovery::ClaudePaths;
use scrollback::history::HistorySearch;
use std::path::Path;

/// State shared by every command that reads the Claude directory.
pub struct CliContext {
    pub config: ScrollbackConfig,
    pub paths: ClaudePaths,
    pub history: HistorySearch,
    pub output: OutputFormat,
}

impl CliContext {
    pub fn new(cli: &Cli) -> scrollback::Result<Self> {
        let config = load_config(
            cli.config.as_deref(),
            cli.claude_root.as_deref(),
            cli.log_level.as_deref(),
        )?;
        Self::from_config(config, cli.output)
    }

    pub fn from_config(config: ScrollbackConfig, output: OutputFormat) -> scrollback::Result<Self> {
        let paths = ClaudePaths::from_config(&config.paths);
        let history = scrollback::init(config.clone())?;

        Ok(Self {
            config,
            paths,
            history,
            output,
        })
    }
}

/// Layer defaults, a config file, the environment and command-line overrides.
///
/// An explicit `config_file` must exist; otherwise the default locations are
/// tried and silently skipped when absent.
pub fn load_config(
    config_file: Option<&Path>,
    claude_root: Option<&Path>,
    log_level: Option<&str>,
) -> scrollback::Result<ScrollbackConfig> {
    let mut loader = ConfigLoader::new();
    match config_file {
        Some(path) => {
            loader.load_file(path)?;
        }
        None => {
            loader.load_default_files();
        }
    }
    loader.load_env();

    let mut config = loader.extract()?;
    if let Some(root) = claude_root {
        config.paths.claude_root = Some(root.to_path_buf());
    }
    if let Some(level) = log_level {
        config.logging.level = scrollback::logging::parse_log_level(level)?;
    }
    Ok(config)
}
