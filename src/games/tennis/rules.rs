//! Scoring rules for a tennis match.
//!
//! A single set is tracked. Winning it, outright or through the tiebreak,
//! wipes the whole match back to love-all; no set count is kept.

use super::contracts::{PlayerRegistered, assert_invariants};
use super::types::{
    GAMES_TO_WIN_SET, POINTS_TO_WIN_GAME, POINTS_TO_WIN_TIEBREAK, PlayerScore, Side, point_label,
};
use super::{MatchError, Point};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tennis match scoring engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub(crate) players: [String; 2],
    pub(crate) scores: [PlayerScore; 2],
    pub(crate) tiebreak: bool,
}

impl Match {
    /// Creates a match between two distinct, non-empty player names.
    ///
    /// Surrounding whitespace is trimmed from both names before they are
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPlayer` if either name is empty or both
    /// names are the same.
    #[instrument(skip(player_a, player_b))]
    pub fn new(
        player_a: impl Into<String>,
        player_b: impl Into<String>,
    ) -> Result<Self, MatchError> {
        let player_a = player_a.into().trim().to_string();
        let player_b = player_b.into().trim().to_string();

        for name in [&player_a, &player_b] {
            if name.is_empty() {
                warn!(player = %name, "Rejected empty player name");
                return Err(MatchError::InvalidPlayer(name.clone()));
            }
        }
        if player_a == player_b {
            warn!(player = %player_b, "Rejected duplicate player name");
            return Err(MatchError::InvalidPlayer(player_b));
        }

        info!(player_a = %player_a, player_b = %player_b, "Creating new match");
        Ok(Self {
            players: [player_a, player_b],
            scores: [PlayerScore::new(); 2],
            tiebreak: false,
        })
    }

    /// Builds a match and applies every winner in order.
    ///
    /// # Errors
    ///
    /// Fails on the first name that is not a registered player.
    #[instrument(skip(player_a, player_b, winners))]
    pub fn replay<I, S>(
        player_a: impl Into<String>,
        player_b: impl Into<String>,
        winners: I,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = Self::new(player_a, player_b)?;
        for winner in winners {
            game.point_won_by(winner.as_ref())?;
        }
        Ok(game)
    }

    /// Returns the name registered on `side`.
    pub fn player(&self, side: Side) -> &str {
        &self.players[side.index()]
    }

    /// Returns the side a name is registered on, if any.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        if self.players[Side::A.index()] == name {
            Some(Side::A)
        } else if self.players[Side::B.index()] == name {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns the counters for `side`.
    pub fn player_score(&self, side: Side) -> PlayerScore {
        self.scores[side.index()]
    }

    /// Returns true while the tiebreak is being played.
    pub fn is_tiebreak(&self) -> bool {
        self.tiebreak
    }

    /// Wipes every counter and leaves the tiebreak.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting match to love-all");
        self.tiebreak = false;
        self.scores = [PlayerScore::new(); 2];
    }

    /// Records a point won by the named player.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPlayer` if `player` is not registered.
    /// The match is left untouched in that case.
    #[instrument(skip(self), fields(player = %player))]
    pub fn point_won_by(&mut self, player: &str) -> Result<(), MatchError> {
        let side = PlayerRegistered::check(player, self)?;
        self.apply(Point::new(side));
        Ok(())
    }

    /// Records a point won by the player on `side`.
    pub fn point_won_by_side(&mut self, side: Side) {
        self.apply(Point::new(side));
    }

    /// Applies a point.
    ///
    /// The four checks after the increment are independent: a single
    /// point may win a game and then trigger a reset in the same call.
    #[instrument(skip(self), fields(winner = %point.winner))]
    pub fn apply(&mut self, point: Point) {
        let w = point.winner.index();
        let o = point.winner.opponent().index();

        if self.tiebreak {
            self.scores[w].tiebreak_points += 1;
        } else {
            self.scores[w].points += 1;
        }

        if self.scores[w].points >= POINTS_TO_WIN_GAME
            && self.scores[w].points > self.scores[o].points + 1
        {
            self.scores[w].points = 0;
            self.scores[o].points = 0;
            self.scores[w].games += 1;
            debug!(
                winner = %self.players[w],
                games_a = self.scores[0].games,
                games_b = self.scores[1].games,
                "Game won"
            );
        }

        if self.scores[w].tiebreak_points >= POINTS_TO_WIN_TIEBREAK
            && self.scores[w].tiebreak_points > self.scores[o].tiebreak_points + 1
        {
            info!(winner = %self.players[w], "Tiebreak won");
            self.reset();
        }

        if self.scores[w].games >= GAMES_TO_WIN_SET
            && self.scores[w].games > self.scores[o].games + 1
        {
            info!(winner = %self.players[w], "Set won");
            self.reset();
        }

        if self.scores[w].games == GAMES_TO_WIN_SET && self.scores[o].games == GAMES_TO_WIN_SET {
            if !self.tiebreak {
                info!("Tiebreak started");
            }
            self.tiebreak = true;
        }

        assert_invariants(self);
    }

    /// Renders the current score, e.g. `"3-2, 30-15"`.
    pub fn score(&self) -> String {
        self.to_string()
    }

    /// Returns a serializable view of the match.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            player_a: self.players[0].clone(),
            player_b: self.players[1].clone(),
            score_a: self.scores[0],
            score_b: self.scores[1],
            tiebreak: self.tiebreak,
            score: self.score(),
        }
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.scores;
        write!(f, "{}-{}, ", a.games, b.games)?;

        if self.tiebreak {
            return write!(f, "Tiebreaker {}-{}", a.tiebreak_points, b.tiebreak_points);
        }

        if a.points >= 3 && b.points >= 3 {
            if a.points == b.points {
                return write!(f, "Deuce");
            }
            let leader = if a.points > b.points { Side::A } else { Side::B };
            return write!(f, "Advantage {}", self.player(leader));
        }

        write_points(f, a.points)?;
        write!(f, "-")?;
        write_points(f, b.points)
    }
}

fn write_points(f: &mut std::fmt::Formatter<'_>, points: u32) -> std::fmt::Result {
    match point_label(points) {
        Some(label) => write!(f, "{}", label),
        None => write!(f, "{}", points),
    }
}

/// Point-in-time view of a match, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchSnapshot {
    /// First registered player.
    player_a: String,
    /// Second registered player.
    player_b: String,
    /// Counters for player A.
    score_a: PlayerScore,
    /// Counters for player B.
    score_b: PlayerScore,
    /// Whether the tiebreak is running.
    tiebreak: bool,
    /// Rendered score.
    score: String,
}
