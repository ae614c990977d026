//! Standings-specific error types

use std::path::PathBuf;
use thiserror::Error;
use shared::{PoolLabel, SharedError};

/// Precondition failures raised while seeding the playoff bracket
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedingError {
    #[error("Pool {pool} has {teams} team(s); seeding needs at least 2")]
    InsufficientPoolSize { pool: PoolLabel, teams: usize },

    #[error("No pools to seed from")]
    NoPools,
}

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Playoff seeding failed: {0}")]
    Seeding(#[from] SeedingError),

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Roster {path} is invalid: {message}")]
    RosterError { path: PathBuf, message: String },

    #[error("Failed to write snapshot to {path}: {source}")]
    SnapshotWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StandingsError {
    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }
}

pub type StandingsResult<T> = Result<T, StandingsError>;
