//! Games in set: a won set never survives a point.

use super::super::types::GAMES_TO_WIN_SET;
use super::super::{Match, Side};
use super::Invariant;

/// Invariant: no player holds more than six games, and nobody holds a
/// set-winning lead.
pub struct GamesInSet;

impl Invariant<Match> for GamesInSet {
    fn holds(state: &Match) -> bool {
        let a = state.player_score(Side::A).games;
        let b = state.player_score(Side::B).games;
        let decided = |w: u32, o: u32| w >= GAMES_TO_WIN_SET && w > o + 1;
        a <= GAMES_TO_WIN_SET && b <= GAMES_TO_WIN_SET && !decided(a, b) && !decided(b, a)
    }

    fn description() -> &'static str {
        "Games stay within an undecided set"
    }
}
