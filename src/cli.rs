//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Glowgrid activity heatmap CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (paths in the config resolve against it)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: glowgrid.toml)
    #[arg(short = 'C', long, default_value = "glowgrid.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build activity grids and write the activity data file
    Generate {
        /// Entries JSON path (relative to project root)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Activity data output path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the entries file without writing anything
    Check {
        /// Entries JSON path (relative to project root)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fail when any entry would be skipped
        #[arg(long)]
        strict: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}
