//! Three-tier bracket grouping
//!
//! The four playoff teams form the championship tier, the next four the
//! plate/shield tier and everyone else the bowl tier.

use shared::{PlayoffPicture, RankingEntry, Rankings, TeamStanding};

use super::pools::Pool;
use super::seeder::{compare_standings, rank_pool};

/// Teams placed in the plate/shield tier
pub const PLATE_SHIELD_SIZE: usize = 4;

pub const WILDCARD_STATUS: &str = "Wildcard";

fn winner_status(pool: &str) -> String {
    format!("Pool {pool} Winner")
}

fn entry(rank: usize, standing: &TeamStanding, status: Option<String>) -> RankingEntry {
    RankingEntry {
        rank: rank as u32,
        name: standing.name.clone(),
        points: standing.points,
        pd: standing.point_differential,
        status,
    }
}

/// Group every pooled team into bracket tiers.
///
/// Unseeded teams are ordered by the seeding comparator; full ties keep pool
/// label order, then finishing order within the pool.
pub fn build_rankings(pools: &[Pool<'_>], picture: &PlayoffPicture) -> Rankings {
    let pooled: Vec<&TeamStanding> = pools
        .iter()
        .flat_map(|pool| {
            let mut ranked = pool.clone();
            rank_pool(&mut ranked);
            ranked.teams
        })
        .collect();

    let find = |name: &str| pooled.iter().copied().find(|t| t.name == name);

    let mut winners: Vec<(&TeamStanding, String)> = picture
        .pool_winners
        .iter()
        .filter_map(|winner| find(winner.team.as_str()).map(|t| (t, winner_status(winner.pool.as_str()))))
        .collect();
    winners.sort_by(|(a, _), (b, _)| compare_standings(a, b));

    let mut championship: Vec<RankingEntry> = winners
        .into_iter()
        .enumerate()
        .map(|(i, (standing, status))| entry(i + 1, standing, Some(status)))
        .collect();

    if let Some(wildcard) = find(picture.fourth_seed.team.as_str()) {
        championship.push(entry(
            championship.len() + 1,
            wildcard,
            Some(WILDCARD_STATUS.to_string()),
        ));
    }

    let mut rest: Vec<&TeamStanding> = pooled
        .iter()
        .copied()
        .filter(|t| !picture.is_seeded(&t.name))
        .collect();
    rest.sort_by(|a, b| compare_standings(a, b));

    let first_rank = championship.len() + 1;
    let mut ranked = rest
        .into_iter()
        .enumerate()
        .map(|(i, standing)| entry(first_rank + i, standing, None));

    let plate_shield = ranked.by_ref().take(PLATE_SHIELD_SIZE).collect();
    let bowl = ranked.collect();

    Rankings {
        championship,
        plate_shield,
        bowl,
    }
}
