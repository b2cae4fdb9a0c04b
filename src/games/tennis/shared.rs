//! Thread-safe handle to a match.

use super::{Match, MatchError, MatchSnapshot, Side};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument};

/// Shared match guarded by a single lock.
///
/// Scoring takes the write lock for the whole read-modify-write; reads
/// share the read lock. A panic while holding the lock cannot leave a
/// half-applied point behind, so a poisoned lock is recovered.
#[derive(Debug, Clone)]
pub struct SharedMatch {
    inner: Arc<RwLock<Match>>,
}

impl SharedMatch {
    /// Wraps a match for shared use.
    #[instrument(skip(game))]
    pub fn new(game: Match) -> Self {
        debug!("Sharing match");
        Self {
            inner: Arc::new(RwLock::new(game)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Match> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Match> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a point won by the named player.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPlayer` if `player` is not registered.
    #[instrument(skip(self))]
    pub fn point_won_by(&self, player: &str) -> Result<(), MatchError> {
        self.write().point_won_by(player)
    }

    /// Records a point won by the player on `side`.
    #[instrument(skip(self))]
    pub fn point_won_by_side(&self, side: Side) {
        self.write().point_won_by_side(side);
    }

    /// Resets the match to love-all.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.write().reset();
    }

    /// Renders the current score.
    pub fn score(&self) -> String {
        self.read().score()
    }

    /// Returns a serializable view of the match.
    pub fn snapshot(&self) -> MatchSnapshot {
        self.read().snapshot()
    }
}

impl From<Match> for SharedMatch {
    fn from(game: Match) -> Self {
        Self::new(game)
    }
}
