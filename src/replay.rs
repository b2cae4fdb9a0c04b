//! Replaying point sequences against a match.
//!
//! A points file holds one winner name per line. Blank lines and lines
//! starting with `#` are skipped.

use crate::games::tennis::{Match, MatchError, MatchSnapshot};
use derive_more::{Display, Error};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Error raised while replaying points.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A point named an unregistered player.
    #[display("Point {position}: {source}")]
    Point {
        /// Argument index or file line of the point (1-based).
        position: usize,
        /// Underlying scoring error.
        source: MatchError,
    },

    /// The points file could not be read.
    #[display("Failed to read points file {path}: {message}")]
    Read {
        /// File that failed.
        path: String,
        /// I/O error text.
        message: String,
    },
}

/// Extracts winners from points file content, keeping their line numbers.
#[instrument(skip(content))]
pub fn parse_points(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| (line_no, line.to_string()))
        .collect()
}

/// Reads and parses a points file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_points_file(path: impl AsRef<Path>) -> Result<Vec<(usize, String)>, ReplayError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ReplayError::Read {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })?;
    let points = parse_points(&content);
    debug!(count = points.len(), "Parsed points file");
    Ok(points)
}

/// Numbers plain winner arguments from 1.
pub fn number_winners<I, S>(winners: I) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    winners
        .into_iter()
        .enumerate()
        .map(|(idx, winner)| (idx + 1, winner.into()))
        .collect()
}

/// Applies each point in order, snapshotting the match after every one.
///
/// Stops at the first unregistered winner; earlier points stay applied.
#[instrument(skip(game, points))]
pub fn replay_points<I, S>(game: &mut Match, points: I) -> Result<Vec<MatchSnapshot>, ReplayError>
where
    I: IntoIterator<Item = (usize, S)>,
    S: AsRef<str>,
{
    let mut snapshots = Vec::new();
    for (position, winner) in points {
        game.point_won_by(winner.as_ref())
            .map_err(|source| ReplayError::Point { position, source })?;
        snapshots.push(game.snapshot());
    }
    info!(points = snapshots.len(), score = %game, "Replay complete");
    Ok(snapshots)
}
