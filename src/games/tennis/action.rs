//! First-class action types for tennis scoring.
//!
//! A point is a domain event: it names who won the rally and can be
//! validated before it is applied to a match.

use super::Side;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single point, won by the player on `winner`'s side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Side of the player who won the point.
    pub winner: Side,
}

impl Point {
    /// Creates a new point.
    #[instrument]
    pub fn new(winner: Side) -> Self {
        Self { winner }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "point -> {}", self.winner)
    }
}

/// Error raised by match construction or scoring.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// The name is not one of the two registered players, or is not
    /// usable as a player name at registration.
    #[display("Invalid player: {:?}", _0)]
    InvalidPlayer(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_player_message_names_player() {
        let err = MatchError::InvalidPlayer("nadal".to_string());
        assert_eq!(err.to_string(), "Invalid player: \"nadal\"");
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(Side::B).to_string(), "point -> B");
    }
}
