//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod calculator;
pub mod pipeline;
pub mod pools;
pub mod rankings;
pub mod schedule;
pub mod seeder;

pub use calculator::{calculate_standings, match_points, StandingsTable};
pub use pipeline::{compute_snapshot, PipelineConfig, PipelineOutput};
pub use pools::{assign_pools, Pool};
pub use rankings::build_rankings;
pub use schedule::{finals_schedule, pool_schedule};
pub use seeder::{compare_standings, rank_pool, seed_playoffs};
