//! Command-line interface for gridmark.

use crate::config::GridmarkConfig;
use clap::{Args, Parser, Subcommand};
use gridmark_engine::ConfigError;
use std::path::PathBuf;
use tracing::instrument;

/// Gridmark - n-in-a-row on any grid, with time travel
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Generalized tic-tac-toe with navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board and display options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rows (overrides the config file)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns (overrides the config file)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Run length needed to win (overrides the config file)
    #[arg(short = 'k', long)]
    pub win_length: Option<usize>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}

impl BoardArgs {
    /// Loads the config file, if any, and applies the flag overrides.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<GridmarkConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GridmarkConfig::from_file(path)?,
            None => GridmarkConfig::default(),
        };
        base.with_overrides(self.rows, self.cols, self.win_length, self.descending)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Board options
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Replay a comma-separated list of cell indices and print the result
    Replay {
        /// Cell indices, e.g. 0,4,1,3,2
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Board options
        #[command(flatten)]
        board: BoardArgs,
    },
}
