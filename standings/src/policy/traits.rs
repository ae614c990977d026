//! Policy trait definitions

use shared::{MatchResult, TeamStanding};

use crate::core::pools::Pool;

/// Decides which pool each team plays in
pub trait PoolAssignment: Send + Sync {
    /// Partition `standings` into labelled pools.
    ///
    /// Pools come back in label order and borrow from `standings`; the order
    /// of teams inside a pool is the pre-ranking order the seeder's stable
    /// sort falls back on for full ties.
    fn assign<'a>(&self, standings: &'a [TeamStanding]) -> Vec<Pool<'a>>;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Decides whether a match contributes to the standings
#[mockall::automock]
pub trait ScorelessMatchPolicy: Send + Sync {
    /// Whether `result` is folded into points and differential
    fn counts(&self, result: &MatchResult) -> bool;

    /// Short name for logging
    fn name(&self) -> &'static str;
}
