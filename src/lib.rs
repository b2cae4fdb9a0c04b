//! Strictly Tennis - type-safe tennis match scoring
//!
//! Tracks points, games and the tiebreak of a two-player match and renders
//! the score the way an umpire would call it.
//!
//! # Architecture
//!
//! - **Games**: the scoring engine (`Match`), its invariants and contracts
//! - **Shared**: a lock-guarded handle for multi-threaded callers
//! - **Config**: TOML match configuration
//! - **Replay**: driving a match from a sequence of point winners
//!
//! # Example
//!
//! ```
//! use strictly_tennis::Match;
//!
//! # fn example() -> Result<(), strictly_tennis::MatchError> {
//! let mut game = Match::new("federer", "nadal")?;
//! game.point_won_by("federer")?;
//! assert_eq!(game.score(), "0-0, 15-0");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, OutputFormat};

// Crate-level exports - Replay
pub use replay::{ReplayError, number_winners, parse_points, read_points_file, replay_points};

// Crate-level exports - Scoring engine
pub use games::tennis::{
    Contract, GAMES_TO_WIN_SET, GamesInSet, Invariant, InvariantSet, InvariantViolation, Match,
    MatchError, MatchInvariants, MatchSnapshot, POINT_LABELS, POINTS_TO_WIN_GAME,
    POINTS_TO_WIN_TIEBREAK, PlayerRegistered, PlayerScore, Point, PointContract, PointsInPlay,
    SharedMatch, Side, TiebreakConsistent, assert_invariants, point_label,
};
