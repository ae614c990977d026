//! Pool-play standings, playoff seeding and schedule snapshots
//!
//! Turns a results file into a single JSON document holding team standings,
//! pool tables, the playoff picture and the day's schedule. The computation
//! lives in `core` and is pure; `services` wrap the file I/O and `runner`
//! ties the two together for one-shot and watch modes.

pub mod core;
pub mod error;
pub mod policy;
pub mod runner;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{
    calculate_standings, compute_snapshot, seed_playoffs, PipelineConfig, PipelineOutput, Pool,
};
pub use error::{SeedingError, StandingsError, StandingsResult};
pub use policy::{AlphabeticalSplit, CountAll, PoolAssignment, ScorelessMatchPolicy, SkipScoreless, StaticRoster};
pub use runner::StandingsRunner;
pub use traits::{ChangeTrigger, ResultSource, SnapshotSink};
