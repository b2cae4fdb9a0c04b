//! Points in play: a game never runs past a two-point lead.

use super::super::{Match, Side};
use super::Invariant;

/// Invariant: once either player has reached four points, the players
/// are at most one point apart.
pub struct PointsInPlay;

impl Invariant<Match> for PointsInPlay {
    fn holds(state: &Match) -> bool {
        let a = state.player_score(Side::A).points;
        let b = state.player_score(Side::B).points;
        a.max(b) < 4 || a.abs_diff(b) <= 1
    }

    fn description() -> &'static str {
        "Game points never reach four with a two-point lead"
    }
}
