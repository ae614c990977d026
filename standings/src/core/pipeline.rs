//! Single-pass snapshot computation
//!
//! Calculator, assigner, seeder and rankings chained into one pure function.
//! Reading the results and writing the snapshot are the runner's job.

use indexmap::IndexMap;

use shared::{MatchResult, TournamentSnapshot};

use super::calculator::calculate_standings;
use super::pools::assign_pools;
use super::rankings::build_rankings;
use super::schedule::{finals_schedule, pool_schedule};
use super::seeder::{rank_pool, seed_playoffs};
use crate::error::SeedingError;
use crate::policy::{AlphabeticalSplit, CountAll, PoolAssignment, ScorelessMatchPolicy};

/// Strategy selection for one pipeline run
pub struct PipelineConfig {
    pub pool_assignment: Box<dyn PoolAssignment>,
    pub scoreless: Box<dyn ScorelessMatchPolicy>,
    pub include_rankings: bool,
}

impl PipelineConfig {
    pub fn new(pool_assignment: Box<dyn PoolAssignment>, scoreless: Box<dyn ScorelessMatchPolicy>) -> Self {
        Self {
            pool_assignment,
            scoreless,
            include_rankings: true,
        }
    }

    pub fn with_rankings(mut self, include_rankings: bool) -> Self {
        self.include_rankings = include_rankings;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(Box::new(AlphabeticalSplit::default()), Box::new(CountAll))
    }
}

impl std::fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("pool_assignment", &self.pool_assignment.name())
            .field("scoreless", &self.scoreless.name())
            .field("include_rankings", &self.include_rankings)
            .finish()
    }
}

/// A computed snapshot and the seeding failure, if any, that left its
/// `playoffs` empty
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub snapshot: TournamentSnapshot,
    pub seeding_error: Option<SeedingError>,
}

impl PipelineOutput {
    pub fn is_seeded(&self) -> bool {
        self.snapshot.playoffs.is_some()
    }
}

/// Compute the full tournament snapshot for a result set.
///
/// With no teams at all seeding is skipped. A seeding precondition failure
/// only empties `playoffs` and `rankings`; standings, pools and schedules are
/// still produced and the failure is handed back in `seeding_error`.
pub fn compute_snapshot(results: &[MatchResult], config: &PipelineConfig) -> PipelineOutput {
    let teams = calculate_standings(results, config.scoreless.as_ref());

    let mut pools = assign_pools(&teams, config.pool_assignment.as_ref());
    for pool in &mut pools {
        rank_pool(pool);
    }

    let (playoffs, seeding_error) = if teams.is_empty() {
        (None, None)
    } else {
        match seed_playoffs(&pools) {
            Ok(picture) => (Some(picture), None),
            Err(e) => (None, Some(e)),
        }
    };

    let rankings = match &playoffs {
        Some(picture) if config.include_rankings => Some(build_rankings(&pools, picture)),
        _ => None,
    };

    let ranked_pools: IndexMap<_, _> = pools
        .iter()
        .map(|pool| (pool.label.clone(), pool.to_standings()))
        .collect();

    let snapshot = TournamentSnapshot {
        pools: ranked_pools,
        playoffs,
        teams,
        match_results: results.to_vec(),
        finals_schedule: finals_schedule(),
        pool_schedule: pool_schedule(),
        rankings,
    };

    PipelineOutput { snapshot, seeding_error }
}
