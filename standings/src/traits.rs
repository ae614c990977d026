//! Service trait definitions for dependency injection

use async_trait::async_trait;

use shared::{MatchResult, TournamentSnapshot};
use crate::error::StandingsResult;

/// Source of raw match results
#[mockall::automock]
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Load every valid result currently available. A missing source yields
    /// an empty list, not an error.
    async fn load_results(&self) -> StandingsResult<Vec<MatchResult>>;

    /// Human-readable location for logging
    fn describe(&self) -> String;
}

/// Destination for computed snapshots
#[mockall::automock]
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    /// Replace the stored snapshot with `snapshot`
    async fn write_snapshot(&self, snapshot: &TournamentSnapshot) -> StandingsResult<()>;

    /// Human-readable location for logging
    fn describe(&self) -> String;
}

/// Signals when the input should be reprocessed
#[mockall::automock]
#[async_trait]
pub trait ChangeTrigger: Send + Sync {
    /// Resolve once the input differs from the last acknowledged state
    async fn next_change(&self) -> StandingsResult<()>;

    /// Acknowledge the pending change after a successful run
    async fn mark_processed(&self);

    /// Delay before retrying after a failed run
    fn error_backoff(&self) -> std::time::Duration;
}
