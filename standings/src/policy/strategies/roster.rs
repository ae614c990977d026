//! Static roster lookup
//!
//! Each team's pool comes from a published draw. Teams missing from the
//! roster are kept out of every pool but still appear in the flat standings.
//! Each such team is warned about once per loaded roster.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use shared::{process_debug, process_warn, PoolLabel, ProcessId, TeamStanding};

use super::super::traits::PoolAssignment;
use crate::core::pools::Pool;
use crate::error::{StandingsError, StandingsResult};

#[derive(Debug)]
pub struct StaticRoster {
    /// (team, pool) in roster order
    entries: Vec<(String, PoolLabel)>,
    /// Unlisted teams already warned about
    reported: Mutex<HashSet<String>>,
}

impl StaticRoster {
    /// Build a roster from `(team, pool)` pairs. A team listed twice is rejected.
    pub fn new(entries: Vec<(String, PoolLabel)>) -> StandingsResult<Self> {
        let mut seen = HashSet::new();
        for (team, _) in &entries {
            if !seen.insert(team.as_str()) {
                return Err(StandingsError::config(format!("team {team:?} appears twice in the roster")));
            }
        }
        Ok(Self {
            entries,
            reported: Mutex::new(HashSet::new()),
        })
    }

    /// Pool labels in order of first appearance
    pub fn labels(&self) -> Vec<PoolLabel> {
        let mut labels: Vec<PoolLabel> = Vec::new();
        for (_, label) in &self.entries {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
        labels
    }

    pub fn pool_of(&self, team: &str) -> Option<&PoolLabel> {
        self.entries
            .iter()
            .find(|(name, _)| name == team)
            .map(|(_, label)| label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record an unlisted team; true only the first time it is seen
    fn first_report(&self, team: &str) -> bool {
        let mut reported = self.reported.lock().unwrap_or_else(|e| e.into_inner());
        reported.insert(team.to_string())
    }
}

impl PoolAssignment for StaticRoster {
    fn assign<'a>(&self, standings: &'a [TeamStanding]) -> Vec<Pool<'a>> {
        let by_name: HashMap<&str, &'a TeamStanding> =
            standings.iter().map(|t| (t.name.as_str(), t)).collect();

        let mut pools: Vec<Pool<'a>> = self.labels().into_iter().map(Pool::new).collect();

        for (team, label) in &self.entries {
            let Some(standing) = by_name.get(team.as_str()) else {
                continue;
            };
            if let Some(pool) = pools.iter_mut().find(|p| &p.label == label) {
                pool.teams.push(*standing);
            }
        }

        for standing in standings {
            if self.pool_of(&standing.name).is_some() {
                continue;
            }
            if self.first_report(&standing.name) {
                process_warn!(
                    ProcessId::current(),
                    "⚠️ Team '{}' has results but no roster entry; left out of pools",
                    standing.name
                );
            } else {
                process_debug!(ProcessId::current(), "Team '{}' still unlisted", standing.name);
            }
        }

        pools
    }

    fn name(&self) -> &'static str {
        "roster"
    }
}
