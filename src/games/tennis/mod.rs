mod action;
mod contracts;
mod invariants;
mod rules;
mod shared;
mod types;

pub use action::{MatchError, Point};
pub use contracts::{Contract, PlayerRegistered, PointContract, assert_invariants};
pub use invariants::{
    GamesInSet, Invariant, InvariantSet, InvariantViolation, MatchInvariants, PointsInPlay,
    TiebreakConsistent,
};
pub use rules::{Match, MatchSnapshot};
pub use shared::SharedMatch;
pub use types::{
    GAMES_TO_WIN_SET, POINT_LABELS, POINTS_TO_WIN_GAME, POINTS_TO_WIN_TIEBREAK, PlayerScore, Side,
    point_label,
};
