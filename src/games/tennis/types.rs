//! Core domain types for tennis scoring.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display labels for in-game points 0 through 3.
pub const POINT_LABELS: [&str; 4] = ["0", "15", "30", "40"];

/// Points a player needs before a game can be won.
pub const POINTS_TO_WIN_GAME: u32 = 4;

/// Games a player needs before a set can be won.
pub const GAMES_TO_WIN_SET: u32 = 6;

/// Tiebreak points a player needs before the tiebreak can be won.
pub const POINTS_TO_WIN_TIEBREAK: u32 = 7;

/// Registration slot of a player.
///
/// `A` is the first player passed at match creation, `B` the second.
/// Scores always render in `A`-then-`B` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Side {
    /// First registered player.
    A,
    /// Second registered player.
    B,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index into per-player storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Per-player counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Points won in the current game.
    pub points: u32,
    /// Points won in the current tiebreak.
    pub tiebreak_points: u32,
    /// Games won in the current set.
    pub games: u32,
}

impl PlayerScore {
    /// Zeroed counters.
    pub const fn new() -> Self {
        Self {
            points: 0,
            tiebreak_points: 0,
            games: 0,
        }
    }
}

/// Returns the display label for an in-game point count.
///
/// Only 0-3 have a label; larger counts render through deuce/advantage.
#[instrument]
pub fn point_label(points: u32) -> Option<&'static str> {
    POINT_LABELS.get(points as usize).copied()
}
