//! Playoff seeding
//!
//! Ranks each pool on competition points, then point differential, and
//! picks the pool winners plus the best runner-up as the fourth seed.

use std::cmp::Ordering;

use shared::{PlayoffPicture, PoolWinner, SeedEntry, TeamStanding};

use super::pools::Pool;
use crate::error::SeedingError;

/// Points descending, then point differential descending.
///
/// Teams level on both compare equal; callers use stable sorts so those keep
/// their incoming order.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.point_differential.cmp(&a.point_differential))
}

/// Sort a pool in place into finishing order
pub fn rank_pool(pool: &mut Pool<'_>) {
    pool.teams.sort_by(|a, b| compare_standings(a, b));
}

/// Select pool winners and the fourth seed.
///
/// Every pool needs a second-placed team, so a pool with fewer than two
/// members is a precondition failure.
pub fn seed_playoffs(pools: &[Pool<'_>]) -> Result<PlayoffPicture, SeedingError> {
    if pools.is_empty() {
        return Err(SeedingError::NoPools);
    }

    if let Some(short) = pools.iter().find(|pool| pool.len() < 2) {
        return Err(SeedingError::InsufficientPoolSize {
            pool: short.label.clone(),
            teams: short.len(),
        });
    }

    let ranked: Vec<Pool<'_>> = pools
        .iter()
        .map(|pool| {
            let mut ranked = pool.clone();
            rank_pool(&mut ranked);
            ranked
        })
        .collect();

    let pool_winners = ranked
        .iter()
        .map(|pool| PoolWinner::from_standing(pool.label.clone(), pool.teams[0]))
        .collect();

    let mut runners_up: Vec<&TeamStanding> = ranked.iter().map(|pool| pool.teams[1]).collect();
    runners_up.sort_by(|a, b| compare_standings(a, b));
    let fourth_seed = SeedEntry::from(runners_up[0]);

    Ok(PlayoffPicture {
        pool_winners,
        fourth_seed,
    })
}
