//! Fixed match-time tables for tournament day

use shared::{FinalsSlot, PoolSlot};

/// (time, match, name)
const FINALS: [(&str, &str, &str); 8] = [
    ("2:45-2:59", "M19", "Consolation Match"),
    ("3:01-3:15", "M20", "Bowl Final"),
    ("3:17-3:31", "M21", "Shield Final"),
    ("3:33-3:47", "M22", "Plate Final"),
    ("3:49-4:03", "M23", "Semifinal 1"),
    ("4:05-4:19", "M24", "Semifinal 2"),
    ("4:30-4:44", "M25", "3rd Place Match"),
    ("4:46-5:00", "M26", "Cup Final"),
];

/// (time, match, pool); lunch break between M15 and M16
const POOL_PLAY: [(&str, &str, &str); 18] = [
    ("9:00-9:14", "M1", "A"),
    ("9:16-9:30", "M2", "A"),
    ("9:32-9:46", "M3", "B"),
    ("9:48-10:02", "M4", "B"),
    ("10:04-10:18", "M5", "C"),
    ("10:20-10:34", "M6", "C"),
    ("10:36-10:50", "M7", "A"),
    ("10:52-11:06", "M8", "A"),
    ("11:08-11:22", "M9", "B"),
    ("11:24-11:38", "M10", "B"),
    ("11:40-11:54", "M11", "C"),
    ("11:56-12:10", "M12", "C"),
    ("12:12-12:26", "M13", "A"),
    ("12:28-12:42", "M14", "A"),
    ("12:44-12:58", "M15", "B"),
    ("1:30-1:44", "M16", "B"),
    ("1:46-2:00", "M17", "C"),
    ("2:02-2:16", "M18", "C"),
];

pub fn finals_schedule() -> Vec<FinalsSlot> {
    FINALS
        .iter()
        .map(|(time, match_id, name)| FinalsSlot {
            time: time.to_string(),
            match_id: match_id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn pool_schedule() -> Vec<PoolSlot> {
    POOL_PLAY
        .iter()
        .map(|(time, match_id, pool)| PoolSlot {
            time: time.to_string(),
            match_id: match_id.to_string(),
            pool: pool.to_string(),
        })
        .collect()
}
