//! Shared types for the pool-play standings system
//!
//! Contains the data model that flows between the result parser, the
//! standings pipeline and the snapshot writer, plus the logging bootstrap
//! used by every entry point.

pub mod types;
pub mod errors;
pub mod logging;
pub mod snapshot;

pub use types::*;
pub use errors::*;

// Re-export the document types written to disk
pub use snapshot::{
    // Playoff seeding
    PlayoffPicture, PoolWinner, SeedEntry,

    // Bracket tiers
    RankingEntry, Rankings,

    // Static schedule tables
    FinalsSlot, PoolSlot,

    // Complete output document
    TournamentSnapshot,
};
