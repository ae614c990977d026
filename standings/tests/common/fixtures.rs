//! Test fixtures and data for standings tests

use shared::MatchResult;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const RESULTS_HEADER: &'static str = "Team 1,Score 1,Team 2,Score 2";
    pub const ROSTER_HEADER: &'static str = "Team,Pool";

    /// Twelve teams, named so the alphabetical split matches the real draw
    pub const POOL_A: [&'static str; 4] = ["Asheville", "Boone", "Cary", "Durham"];
    pub const POOL_B: [&'static str; 4] = ["Elon", "Fayetteville", "Greensboro", "Hickory"];
    pub const POOL_C: [&'static str; 4] = ["Irmo", "Jacksonville", "Kinston", "Lenoir"];

    /// The worked example: Duke 5 pts / +7, UVA 1 pt / -7
    pub fn duke_uva() -> MatchResult {
        MatchResult::new("Duke", 24, "UVA", 17)
    }

    /// Six round-robin results for one pool, finishing order = listed order
    pub fn round_robin(teams: [&str; 4]) -> Vec<MatchResult> {
        let [t1, t2, t3, t4] = teams;
        vec![
            MatchResult::new(t1, 31, t2, 12),
            MatchResult::new(t3, 19, t4, 14),
            MatchResult::new(t1, 26, t3, 5),
            MatchResult::new(t2, 22, t4, 17),
            MatchResult::new(t1, 40, t4, 0),
            MatchResult::new(t2, 10, t3, 10),
        ]
    }

    /// A complete pool-play day for all three pools. Pool C's runner-up wins
    /// a fifth match so it takes the wildcard outright.
    pub fn full_day() -> Vec<MatchResult> {
        let mut results = Vec::new();
        results.extend(Self::round_robin(Self::POOL_A));
        results.extend(Self::round_robin(Self::POOL_B));
        results.extend(Self::round_robin(Self::POOL_C));
        results.push(MatchResult::new("Jacksonville", 27, "Kinston", 3));
        results
    }

    /// Render results as a CSV file body with header
    pub fn results_csv(results: &[MatchResult]) -> String {
        let mut csv = format!("{}\n", Self::RESULTS_HEADER);
        for r in results {
            csv.push_str(&format!("{},{},{},{}\n", r.team_a, r.score_a, r.team_b, r.score_b));
        }
        csv
    }

    /// Roster placing the full-day teams in their pools
    pub fn roster_csv() -> String {
        let mut csv = format!("{}\n", Self::ROSTER_HEADER);
        for (label, teams) in [("A", Self::POOL_A), ("B", Self::POOL_B), ("C", Self::POOL_C)] {
            for team in teams {
                csv.push_str(&format!("{team},{label}\n"));
            }
        }
        csv
    }
}
