//! Playoff seeding output

use serde::{Deserialize, Serialize};

use crate::types::{PoolLabel, TeamStanding};

/// Top team of a single pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolWinner {
    pub pool: PoolLabel,
    pub team: String,
    pub points: u32,
    pub pd: i64,
}

impl PoolWinner {
    pub fn from_standing(pool: PoolLabel, standing: &TeamStanding) -> Self {
        Self {
            pool,
            team: standing.name.clone(),
            points: standing.points,
            pd: standing.point_differential,
        }
    }
}

/// Best second-placed team across all pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    pub team: String,
    pub points: u32,
    pub pd: i64,
}

impl From<&TeamStanding> for SeedEntry {
    fn from(standing: &TeamStanding) -> Self {
        Self {
            team: standing.name.clone(),
            points: standing.points,
            pd: standing.point_differential,
        }
    }
}

/// Four-team bracket: every pool winner plus the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffPicture {
    pub pool_winners: Vec<PoolWinner>,
    pub fourth_seed: SeedEntry,
}

impl PlayoffPicture {
    /// Whether the named team holds any playoff slot
    pub fn is_seeded(&self, team: &str) -> bool {
        self.fourth_seed.team == team || self.pool_winners.iter().any(|w| w.team == team)
    }
}
