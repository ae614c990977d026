//! Static schedule table rows

use serde::{Deserialize, Serialize};

/// A finals-day match slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalsSlot {
    pub time: String,
    #[serde(rename = "match")]
    pub match_id: String,
    pub name: String,
}

/// A pool-play match slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSlot {
    pub time: String,
    #[serde(rename = "match")]
    pub match_id: String,
    pub pool: String,
}
