//! Strictly Tennis - CLI
//!
//! Replays tennis points and prints the score after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MatchOptions};
use strictly_tennis::{
    MatchConfig, MatchSnapshot, OutputFormat, number_winners, read_points_file, replay_points,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Config file picked up when `--config` is not given.
const DEFAULT_CONFIG: &str = "tennis.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { options, winners } => run(options, number_winners(winners)),
        Command::Replay { options, file } => {
            let points = read_points_file(&file)
                .with_context(|| format!("Could not load points from {}", file.display()))?;
            run(options, points)
        }
    }
}

/// Resolves config from file and flags.
#[instrument(skip(options))]
fn load_config(options: MatchOptions) -> Result<MatchConfig> {
    let config = match options.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::load_or_default(DEFAULT_CONFIG)?,
    };
    let config = config.with_overrides(options.player_a, options.player_b, options.format);
    debug!(?config, "Resolved match config");
    Ok(config)
}

/// Scores every point and prints one line per point.
#[instrument(skip(options, points))]
fn run(options: MatchOptions, points: Vec<(usize, String)>) -> Result<()> {
    let config = load_config(options)?;
    let mut game = config.create_match()?;

    info!(points = points.len(), "Scoring match");
    let snapshots = replay_points(&mut game, points)?;

    for snapshot in &snapshots {
        println!("{}", render(snapshot, *config.format())?);
    }
    Ok(())
}

/// Formats a single score line.
fn render(snapshot: &MatchSnapshot, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => snapshot.score().clone(),
        OutputFormat::Json => serde_json::to_string(snapshot)?,
    })
}
