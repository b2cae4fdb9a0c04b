//! Tiebreak consistency: the flag and the counters agree.

use super::super::types::{GAMES_TO_WIN_SET, POINTS_TO_WIN_TIEBREAK};
use super::super::{Match, Side};
use super::Invariant;

/// Invariant: a running tiebreak sits at six games all with no game
/// points and no decided tiebreak; otherwise tiebreak points are zero.
pub struct TiebreakConsistent;

impl Invariant<Match> for TiebreakConsistent {
    fn holds(state: &Match) -> bool {
        let a = state.player_score(Side::A);
        let b = state.player_score(Side::B);

        if !state.is_tiebreak() {
            return a.tiebreak_points == 0 && b.tiebreak_points == 0;
        }

        let decided = |w: u32, o: u32| w >= POINTS_TO_WIN_TIEBREAK && w > o + 1;
        a.games == GAMES_TO_WIN_SET
            && b.games == GAMES_TO_WIN_SET
            && a.points == 0
            && b.points == 0
            && !decided(a.tiebreak_points, b.tiebreak_points)
            && !decided(b.tiebreak_points, a.tiebreak_points)
    }

    fn description() -> &'static str {
        "Tiebreak runs only at six games all and only until decided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_all() -> Match {
        let mut game = Match::new("a", "b").unwrap();
        for _ in 0..6 {
            for _ in 0..4 {
                game.point_won_by_side(Side::A);
            }
            for _ in 0..4 {
                game.point_won_by_side(Side::B);
            }
        }
        game
    }

    #[test]
    fn test_holds_during_tiebreak() {
        let mut game = six_all();
        assert!(game.is_tiebreak());
        for _ in 0..6 {
            game.point_won_by_side(Side::B);
        }
        assert!(TiebreakConsistent::holds(&game));
    }

    #[test]
    fn test_detects_stray_tiebreak_points() {
        let mut game = Match::new("a", "b").unwrap();
        game.scores[0].tiebreak_points = 1;
        assert!(!TiebreakConsistent::holds(&game));
    }

    #[test]
    fn test_detects_tiebreak_off_six_all() {
        let mut game = six_all();
        game.scores[1].games = 5;
        assert!(!TiebreakConsistent::holds(&game));
    }
}
