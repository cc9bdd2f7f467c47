//! Glowgrid - the activity heatmap build tool.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use glowgrid::{
    config::GridConfig,
    generate::{run_check, run_generate},
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Generate { .. } => run_generate(&config).map(|_| ()),
        Commands::Check { strict, .. } => run_check(&config, *strict).map(|_| ()),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every field has a default and
/// the paths can come from the command line.
fn load_config(cli: &Cli) -> Result<GridConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        GridConfig::from_path(&config_path)?
    } else {
        GridConfig::default()
    };

    let (input, output) = match &cli.command {
        Commands::Generate { input, output } => (input.as_deref(), output.as_deref()),
        Commands::Check { input, .. } => (input.as_deref(), None),
    };
    config.update_with_overrides(root, input, output);
    config.validate()?;

    Ok(config)
}
