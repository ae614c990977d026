//! Positional pool split
//!
//! Teams are sorted by name and dealt into pools in fixed-size chunks. This
//! needs no roster, but it only matches the real draw when team names happen
//! to sort into their pools.

use shared::{PoolLabel, TeamStanding};

use super::super::traits::PoolAssignment;
use crate::core::pools::Pool;
use crate::error::{StandingsError, StandingsResult};

/// Default number of teams per pool
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Default pool labels
pub const DEFAULT_POOL_LABELS: [&str; 3] = ["A", "B", "C"];

#[derive(Debug, Clone)]
pub struct AlphabeticalSplit {
    labels: Vec<PoolLabel>,
    pool_size: usize,
}

impl AlphabeticalSplit {
    /// Create a split over `labels`, `pool_size` teams per pool. Teams beyond
    /// the last full chunk stay in the last pool.
    pub fn new(labels: Vec<PoolLabel>, pool_size: usize) -> StandingsResult<Self> {
        if labels.is_empty() {
            return Err(StandingsError::config("pool labels must not be empty"));
        }
        if pool_size == 0 {
            return Err(StandingsError::config("pool size must be at least 1"));
        }
        Ok(Self { labels, pool_size })
    }

    pub fn labels(&self) -> &[PoolLabel] {
        &self.labels
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }
}

impl Default for AlphabeticalSplit {
    fn default() -> Self {
        Self {
            labels: DEFAULT_POOL_LABELS
                .into_iter()
                .map(PoolLabel::from_static)
                .collect(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl PoolAssignment for AlphabeticalSplit {
    fn assign<'a>(&self, standings: &'a [TeamStanding]) -> Vec<Pool<'a>> {
        let mut sorted: Vec<&'a TeamStanding> = standings.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut pools: Vec<Pool<'a>> = self.labels.iter().cloned().map(Pool::new).collect();
        let last = pools.len() - 1;

        for (position, team) in sorted.into_iter().enumerate() {
            let index = (position / self.pool_size).min(last);
            pools[index].teams.push(team);
        }

        pools
    }

    fn name(&self) -> &'static str {
        "alphabetical"
    }
}
