//! Test helpers and builder patterns for standings tests

use std::path::{Path, PathBuf};

use shared::MatchResult;
use standings::traits::{MockResultSource, MockSnapshotSink};
use standings::{PipelineConfig, StandingsRunner};

use super::fixtures::TestFixtures;

/// Builder for runners over mocked services
pub struct RunnerBuilder {
    results: Vec<MatchResult>,
    expected_writes: usize,
    config: PipelineConfig,
}

impl RunnerBuilder {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            expected_writes: 1,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_results(mut self, results: Vec<MatchResult>) -> Self {
        self.results = results;
        self
    }

    pub fn expecting_writes(mut self, writes: usize) -> Self {
        self.expected_writes = writes;
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> StandingsRunner<MockResultSource, MockSnapshotSink> {
        let results = self.results;
        let mut source = MockResultSource::new();
        source
            .expect_load_results()
            .returning(move || Ok(results.clone()));
        source.expect_describe().return_const("mock results".to_string());

        let mut sink = MockSnapshotSink::new();
        sink.expect_write_snapshot()
            .times(self.expected_writes)
            .returning(|_| Ok(()));
        sink.expect_describe().return_const("mock snapshot".to_string());

        StandingsRunner::new(source, sink, self.config)
    }
}

/// Static helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Write a results CSV into `dir` and return its path
    pub fn write_results(dir: &Path, results: &[MatchResult]) -> PathBuf {
        let path = dir.join("Results.csv");
        std::fs::write(&path, TestFixtures::results_csv(results)).unwrap();
        path
    }

    pub fn write_roster(dir: &Path) -> PathBuf {
        let path = dir.join("roster.csv");
        std::fs::write(&path, TestFixtures::roster_csv()).unwrap();
        path
    }

    pub fn read_snapshot(path: &Path) -> serde_json::Value {
        let content = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// Team names of one pool in the snapshot JSON, in emitted order
    pub fn pool_names(snapshot: &serde_json::Value, label: &str) -> Vec<String> {
        snapshot["pools"][label]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect()
    }
}
