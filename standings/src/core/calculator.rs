//! Standings calculation
//!
//! Folds match outcomes into per-team competition points and point
//! differential. The fold threads an explicit `StandingsTable` accumulator
//! through every result and hands it back; nothing is shared or global.

use std::collections::BTreeMap;

use shared::{MatchResult, TeamStanding};

use crate::policy::ScorelessMatchPolicy;

/// Points for winning a match
pub const WIN_POINTS: u32 = 4;

/// Points each side receives for a draw
pub const DRAW_POINTS: u32 = 2;

/// Points for losing within `LOSING_BONUS_MARGIN`
pub const LOSING_BONUS_POINTS: u32 = 1;

/// Widest losing margin (inclusive) that still earns the losing bonus
pub const LOSING_BONUS_MARGIN: u32 = 7;

/// Points for reaching `TRY_BONUS_THRESHOLD` in a match, win or lose
pub const TRY_BONUS_POINTS: u32 = 1;

/// Score at which the try bonus is awarded (four tries at five points)
pub const TRY_BONUS_THRESHOLD: u32 = 20;

/// Competition points earned by each side of one match, `(team_a, team_b)`
pub fn match_points(result: &MatchResult) -> (u32, u32) {
    let (mut points_a, mut points_b) = if result.score_a > result.score_b {
        (WIN_POINTS, losing_bonus(result.margin()))
    } else if result.score_b > result.score_a {
        (losing_bonus(result.margin()), WIN_POINTS)
    } else {
        (DRAW_POINTS, DRAW_POINTS)
    };

    points_a += try_bonus(result.score_a);
    points_b += try_bonus(result.score_b);

    (points_a, points_b)
}

fn losing_bonus(margin: u32) -> u32 {
    if margin <= LOSING_BONUS_MARGIN {
        LOSING_BONUS_POINTS
    } else {
        0
    }
}

fn try_bonus(score: u32) -> u32 {
    if score >= TRY_BONUS_THRESHOLD {
        TRY_BONUS_POINTS
    } else {
        0
    }
}

/// Accumulator keyed by team name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingsTable {
    teams: BTreeMap<String, TeamStanding>,
}

impl StandingsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a zeroed standing exists for `name`
    pub fn register(&mut self, name: &str) {
        if !self.teams.contains_key(name) {
            self.teams.insert(name.to_string(), TeamStanding::new(name));
        }
    }

    /// Apply one match's point and differential deltas to both teams
    pub fn apply(&mut self, result: &MatchResult) {
        let (points_a, points_b) = match_points(result);
        let differential = result.differential();

        let team_a = self.entry(&result.team_a);
        team_a.points += points_a;
        team_a.point_differential += differential;

        let team_b = self.entry(&result.team_b);
        team_b.points += points_b;
        team_b.point_differential -= differential;
    }

    fn entry(&mut self, name: &str) -> &mut TeamStanding {
        self.teams
            .entry(name.to_string())
            .or_insert_with(|| TeamStanding::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&TeamStanding> {
        self.teams.get(name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Flatten to a sequence ordered by team name
    pub fn into_standings(self) -> Vec<TeamStanding> {
        self.teams.into_values().collect()
    }
}

/// Fold every result into a fresh table.
///
/// Every team named in any result gets a standing, including teams whose only
/// matches are passed over by `policy`.
pub fn build_table(results: &[MatchResult], policy: &dyn ScorelessMatchPolicy) -> StandingsTable {
    let registered = results.iter().fold(StandingsTable::new(), |mut table, result| {
        table.register(&result.team_a);
        table.register(&result.team_b);
        table
    });

    results
        .iter()
        .filter(|result| policy.counts(result))
        .fold(registered, |mut table, result| {
            table.apply(result);
            table
        })
}

/// Compute the flat standings sequence for a result set
pub fn calculate_standings(
    results: &[MatchResult],
    policy: &dyn ScorelessMatchPolicy,
) -> Vec<TeamStanding> {
    build_table(results, policy).into_standings()
}
