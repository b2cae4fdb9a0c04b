//! Contract-based validation for tennis scoring.
//!
//! Contracts pair a precondition on the incoming point with a
//! postcondition over the resulting match: {P} point {Q}.

use super::invariants::{
    GamesInSet, Invariant, InvariantSet, MatchInvariants, PointsInPlay, TiebreakConsistent,
};
use super::{Match, MatchError, Side};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A: ?Sized> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MatchError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MatchError>;
}

/// Precondition: the point winner must be one of the two registered players.
pub struct PlayerRegistered;

impl PlayerRegistered {
    /// Resolves `player` to its side, or rejects it.
    #[instrument(skip(game))]
    pub fn check(player: &str, game: &Match) -> Result<Side, MatchError> {
        game.side_of(player).ok_or_else(|| {
            warn!(player, "Point awarded to unregistered player");
            MatchError::InvalidPlayer(player.to_string())
        })
    }
}

/// Contract for awarding a point by player name.
///
/// Preconditions:
/// - Winner is a registered player
///
/// Postconditions:
/// - Game points never sit past a two-point lead
/// - Games stay within an undecided set
/// - Tiebreak flag agrees with the counters
pub struct PointContract;

impl Contract<Match, str> for PointContract {
    fn pre(game: &Match, player: &str) -> Result<(), MatchError> {
        PlayerRegistered::check(player, game).map(|_| ())
    }

    fn post(_before: &Match, after: &Match) -> Result<(), MatchError> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Match invariants violated");
            MatchError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all match invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Match) {
    debug_assert!(PointsInPlay::holds(game), "{}", PointsInPlay::description());
    debug_assert!(GamesInSet::holds(game), "{}", GamesInSet::description());
    debug_assert!(
        TiebreakConsistent::holds(game),
        "{}",
        TiebreakConsistent::description()
    );
}
