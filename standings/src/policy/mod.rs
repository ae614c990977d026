//! Pluggable policies for the standings pipeline
//!
//! Pool membership and scoreless-match handling are strategy objects
//! selected at startup.

pub mod traits;
pub mod strategies;

pub use traits::{PoolAssignment, ScorelessMatchPolicy};
pub use strategies::{AlphabeticalSplit, CountAll, SkipScoreless, StaticRoster};
