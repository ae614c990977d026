//! Scoreless (0-0) match handling

use shared::MatchResult;

use super::super::traits::ScorelessMatchPolicy;

/// Every recorded match counts, 0-0 included (a 0-0 is a draw)
#[derive(Debug, Clone, Copy, Default)]
pub struct CountAll;

impl ScorelessMatchPolicy for CountAll {
    fn counts(&self, _result: &MatchResult) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "count-all"
    }
}

/// 0-0 rows are treated as placeholders for unplayed matches and ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipScoreless;

impl ScorelessMatchPolicy for SkipScoreless {
    fn counts(&self, result: &MatchResult) -> bool {
        !result.is_scoreless()
    }

    fn name(&self) -> &'static str {
        "skip-scoreless"
    }
}
