//! Three-tier bracket grouping

use serde::{Deserialize, Serialize};

/// One team's place in a bracket tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub name: String,
    pub points: u32,
    pub pd: i64,
    /// Which playoff slot the team occupies (championship tier only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rankings {
    /// Cup bracket: pool winners and the wildcard
    pub championship: Vec<RankingEntry>,
    /// Next four teams
    pub plate_shield: Vec<RankingEntry>,
    /// Everyone else
    pub bowl: Vec<RankingEntry>,
}

impl Rankings {
    pub fn len(&self) -> usize {
        self.championship.len() + self.plate_shield.len() + self.bowl.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries in rank order
    pub fn iter(&self) -> impl Iterator<Item = &RankingEntry> {
        self.championship
            .iter()
            .chain(self.plate_shield.iter())
            .chain(self.bowl.iter())
    }
}
