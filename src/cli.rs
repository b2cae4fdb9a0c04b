//! Command-line interface for strictly_tennis.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_tennis::OutputFormat;

/// Strictly Tennis - score a tennis match point by point
#[derive(Parser, Debug)]
#[command(name = "strictly_tennis")]
#[command(about = "Replay tennis points and print the running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score points given as arguments, one winner name each
    Play {
        /// Match options
        #[command(flatten)]
        options: MatchOptions,

        /// Point winners in order
        #[arg(required = true)]
        winners: Vec<String>,
    },

    /// Score points read from a file, one winner name per line
    Replay {
        /// Match options
        #[command(flatten)]
        options: MatchOptions,

        /// Points file ('#' starts a comment line)
        file: PathBuf,
    },
}

/// Options shared by every scoring command
#[derive(Args, Debug)]
pub struct MatchOptions {
    /// Path to match config (defaults to tennis.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the first player's name
    #[arg(long)]
    pub player_a: Option<String>,

    /// Override the second player's name
    #[arg(long)]
    pub player_b: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}
