//! Results file reader
//!
//! Reads `team A, score A, team B, score B` rows from a CSV file with a header
//! row. Extra columns are ignored. Rows that cannot be read as a match result
//! are skipped; the file as a whole never fails on bad content.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use shared::{process_debug, process_warn, MatchResult, ProcessId};

use crate::error::{StandingsError, StandingsResult};
use crate::traits::ResultSource;

/// Minimum number of fields in a usable row
const RESULT_FIELDS: usize = 4;

/// Row counts from one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub accepted: usize,
    pub short_rows: usize,
    pub invalid_rows: usize,
}

/// Parse result rows from any reader. The first row is treated as a header.
pub fn parse_results<R: Read>(reader: R) -> StandingsResult<Vec<MatchResult>> {
    parse_results_with_stats(reader).map(|(results, _)| results)
}

pub fn parse_results_with_stats<R: Read>(reader: R) -> StandingsResult<(Vec<MatchResult>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut results = Vec::new();
    let mut stats = ParseStats::default();

    for (index, record) in reader.records().enumerate() {
        // header is line 1
        let line = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                stats.invalid_rows += 1;
                process_warn!(ProcessId::current(), "⚠️ Line {}: unreadable row skipped: {}", line, e);
                continue;
            }
        };

        if record.len() < RESULT_FIELDS {
            stats.short_rows += 1;
            process_debug!(ProcessId::current(), "Line {}: {} field(s), row skipped", line, record.len());
            continue;
        }

        let (team_a, score_a, team_b, score_b) = (&record[0], &record[1], &record[2], &record[3]);

        if team_a.is_empty() || team_b.is_empty() {
            stats.invalid_rows += 1;
            process_warn!(ProcessId::current(), "⚠️ Line {}: missing team name, row skipped", line);
            continue;
        }

        let (score_a, score_b) = match (score_a.parse::<u32>(), score_b.parse::<u32>()) {
            (Ok(a), Ok(b)) => (a, b),
            _ => {
                stats.invalid_rows += 1;
                process_warn!(
                    ProcessId::current(),
                    "⚠️ Line {}: invalid score '{}'-'{}', row skipped",
                    line,
                    score_a,
                    score_b
                );
                continue;
            }
        };

        results.push(MatchResult::new(team_a, score_a, team_b, score_b));
        stats.accepted += 1;
    }

    Ok((results, stats))
}

/// `ResultSource` backed by a CSV file on disk
pub struct CsvResultSource {
    path: PathBuf,
}

impl CsvResultSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultSource for CsvResultSource {
    async fn load_results(&self) -> StandingsResult<Vec<MatchResult>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                process_debug!(ProcessId::current(), "📂 {} not found, no results yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StandingsError::IoError(e)),
        };

        let (results, stats) = parse_results_with_stats(bytes.as_slice())?;
        process_debug!(
            ProcessId::current(),
            "📥 Read {} result(s) from {} ({} short, {} invalid)",
            stats.accepted,
            self.path.display(),
            stats.short_rows,
            stats.invalid_rows
        );
        Ok(results)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
