//! Roster file loading for the static pool policy
//!
//! Two columns, `Team,Pool`, with a header row. Blank rows are ignored.

use std::io::Read;
use std::path::Path;

use shared::PoolLabel;

use crate::error::{StandingsError, StandingsResult};
use crate::policy::StaticRoster;

/// Parse roster rows from any reader
pub fn parse_roster<R: Read>(reader: R, origin: &Path) -> StandingsResult<StaticRoster> {
    let roster_error = |message: String| StandingsError::RosterError {
        path: origin.to_path_buf(),
        message,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 2;
        let record = record.map_err(|e| roster_error(format!("line {line}: {e}")))?;

        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < 2 || record[0].is_empty() {
            return Err(roster_error(format!("line {line}: expected `team,pool`")));
        }

        let label: PoolLabel = record[1]
            .parse()
            .map_err(|e| roster_error(format!("line {line}: {e}")))?;
        entries.push((record[0].to_string(), label));
    }

    if entries.is_empty() {
        return Err(roster_error("no teams listed".to_string()));
    }

    StaticRoster::new(entries).map_err(|e| roster_error(e.to_string()))
}

/// Load a roster file. Unlike the results file, a missing roster is an error.
pub fn load_roster(path: &Path) -> StandingsResult<StaticRoster> {
    let file = std::fs::File::open(path).map_err(|e| StandingsError::RosterError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_roster(file, path)
}
