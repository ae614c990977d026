//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::SharedError;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Identifies which entry point is emitting log events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// One-shot snapshot generation
    #[default]
    Generate,
    /// Long-running re-trigger loop
    Watch,
}

impl ProcessId {
    /// Initialize the global process ID for one-shot generation
    pub fn init_generate() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Generate)
    }

    /// Initialize the global process ID for the watch loop
    pub fn init_watch() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Watch)
    }

    /// Get the global process ID, falling back to `Generate` when no
    /// entry point has claimed it (library use, tests)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get_or_init(ProcessId::default)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Generate => write!(f, "generate"),
            ProcessId::Watch => write!(f, "watch"),
        }
    }
}

/// Outcome of a single pool-play match, one per valid input row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "team1")]
    pub team_a: String,
    #[serde(rename = "score1")]
    pub score_a: u32,
    #[serde(rename = "team2")]
    pub team_b: String,
    #[serde(rename = "score2")]
    pub score_b: u32,
}

impl MatchResult {
    pub fn new(team_a: impl Into<String>, score_a: u32, team_b: impl Into<String>, score_b: u32) -> Self {
        Self {
            team_a: team_a.into(),
            score_a,
            team_b: team_b.into(),
            score_b,
        }
    }

    /// Signed score difference from team A's perspective
    pub fn differential(&self) -> i64 {
        i64::from(self.score_a) - i64::from(self.score_b)
    }

    /// Absolute winning margin (0 for a draw)
    pub fn margin(&self) -> u32 {
        self.score_a.abs_diff(self.score_b)
    }

    pub fn is_draw(&self) -> bool {
        self.score_a == self.score_b
    }

    /// Both sides failed to score
    pub fn is_scoreless(&self) -> bool {
        self.score_a == 0 && self.score_b == 0
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{} {}", self.team_a, self.score_a, self.score_b, self.team_b)
    }
}

/// Aggregate competition points and point differential for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub name: String,
    pub points: u32,
    #[serde(rename = "pd")]
    pub point_differential: i64,
}

impl TeamStanding {
    /// Fresh standing with no points and zero differential
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            point_differential: 0,
        }
    }

    pub fn with_totals(name: impl Into<String>, points: u32, point_differential: i64) -> Self {
        Self {
            name: name.into(),
            points,
            point_differential,
        }
    }
}

/// Name of a pool ("A", "B", ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolLabel(String);

impl PoolLabel {
    /// Label from a compile-time constant, trusted to be well-formed
    pub fn from_static(label: &'static str) -> Self {
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PoolLabel {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(SharedError::InvalidPoolLabel { label: s.to_string() });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for PoolLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
