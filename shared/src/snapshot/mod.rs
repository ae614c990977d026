//! Output document types
//!
//! This module organizes everything the snapshot writer serializes:
//! - `playoffs`: pool winners and the wildcard seed
//! - `rankings`: championship / plate-shield / bowl tiers
//! - `schedule`: static match-time tables

pub mod playoffs;
pub mod rankings;
pub mod schedule;

pub use playoffs::{PlayoffPicture, PoolWinner, SeedEntry};
pub use rankings::{RankingEntry, Rankings};
pub use schedule::{FinalsSlot, PoolSlot};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{MatchResult, PoolLabel, TeamStanding};

/// Complete computed tournament state, replaced wholesale on every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    /// Pool label -> standings ranked within the pool, in assignment order
    pub pools: IndexMap<PoolLabel, Vec<TeamStanding>>,
    /// Absent when no team has played yet
    pub playoffs: Option<PlayoffPicture>,
    /// Flat standings for every team seen in the results
    pub teams: Vec<TeamStanding>,
    /// Parsed input, echoed back unchanged
    pub match_results: Vec<MatchResult>,
    pub finals_schedule: Vec<FinalsSlot>,
    pub pool_schedule: Vec<PoolSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rankings: Option<Rankings>,
}

impl TournamentSnapshot {
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Look up a team's flat standing by name
    pub fn team(&self, name: &str) -> Option<&TeamStanding> {
        self.teams.iter().find(|t| t.name == name)
    }
}
