//! Pool grouping

use shared::{PoolLabel, TeamStanding};

use crate::policy::PoolAssignment;

/// A labelled group of teams. Holds references into the standings it was
/// built from; team data is never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool<'a> {
    pub label: PoolLabel,
    pub teams: Vec<&'a TeamStanding>,
}

impl<'a> Pool<'a> {
    pub fn new(label: PoolLabel) -> Self {
        Self {
            label,
            teams: Vec::new(),
        }
    }

    pub fn with_teams(label: PoolLabel, teams: Vec<&'a TeamStanding>) -> Self {
        Self { label, teams }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t.name == name)
    }

    /// Owned copy of the members, in current order
    pub fn to_standings(&self) -> Vec<TeamStanding> {
        self.teams.iter().map(|t| (*t).clone()).collect()
    }
}

/// Partition `standings` with the given membership policy
pub fn assign_pools<'a>(standings: &'a [TeamStanding], policy: &dyn PoolAssignment) -> Vec<Pool<'a>> {
    policy.assign(standings)
}
