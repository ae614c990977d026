//! Standings runner
//!
//! Drives the pipeline against injected services: read results, compute the
//! snapshot, write it. `watch` repeats that whenever the change trigger fires
//! until a shutdown signal arrives.

use tokio::sync::mpsc;

use shared::{logging, process_debug, process_info, ProcessId};

use crate::core::{compute_snapshot, PipelineConfig, PipelineOutput};
use crate::error::StandingsResult;
use crate::traits::{ChangeTrigger, ResultSource, SnapshotSink};

pub struct StandingsRunner<S, W>
where
    S: ResultSource,
    W: SnapshotSink,
{
    source: S,
    sink: W,
    config: PipelineConfig,
}

impl<S, W> StandingsRunner<S, W>
where
    S: ResultSource,
    W: SnapshotSink,
{
    /// Create new runner with injected dependencies
    pub fn new(source: S, sink: W, config: PipelineConfig) -> Self {
        Self { source, sink, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// One full pass. Nothing is written if reading fails. A seeding failure
    /// still writes the unseeded snapshot, logs the failure and returns it in
    /// the output.
    pub async fn run_once(&self) -> StandingsResult<PipelineOutput> {
        let results = self.source.load_results().await?;
        process_debug!(
            ProcessId::current(),
            "📋 {} result(s) from {}",
            results.len(),
            self.source.describe()
        );

        let output = compute_snapshot(&results, &self.config);
        let snapshot = &output.snapshot;
        self.sink.write_snapshot(snapshot).await?;

        let seeded = if output.is_seeded() { "seeded" } else { "not seeded" };
        process_info!(
            ProcessId::current(),
            "✅ Snapshot written to {}: {} team(s), {} pool(s), playoffs {}",
            self.sink.describe(),
            snapshot.team_count(),
            snapshot.pools.len(),
            seeded
        );
        if let Some(e) = &output.seeding_error {
            logging::log_error(ProcessId::current(), "Playoff seeding", e);
        }
        Ok(output)
    }

    /// Re-run on every change until `shutdown` receives a message or its
    /// sender is dropped. A change counts as processed once its snapshot is
    /// written, seeded or not. Read and write failures are logged and retried
    /// after the trigger's error backoff; they never end the loop.
    pub async fn watch<T: ChangeTrigger>(
        &self,
        trigger: &T,
        mut shutdown: mpsc::Receiver<()>,
    ) -> StandingsResult<()> {
        logging::log_startup(
            ProcessId::current(),
            &format!("watching {} -> {}", self.source.describe(), self.sink.describe()),
        );

        loop {
            let change = tokio::select! {
                _ = shutdown.recv() => break,
                change = trigger.next_change() => change,
            };

            let outcome = match change {
                Ok(()) => self.run_once().await.map(|_| ()),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => trigger.mark_processed().await,
                Err(e) => {
                    logging::log_error(ProcessId::current(), "Snapshot update", &e);
                    tokio::select! {
                        _ = shutdown.recv() => break,
                        _ = tokio::time::sleep(trigger.error_backoff()) => {}
                    }
                }
            }
        }

        logging::log_shutdown(ProcessId::current(), "watch loop stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SeedingError, StandingsError};
    use crate::traits::{MockChangeTrigger, MockResultSource, MockSnapshotSink};
    use shared::MatchResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn source_with(results: Vec<MatchResult>) -> MockResultSource {
        let mut source = MockResultSource::new();
        source.expect_load_results().returning(move || Ok(results.clone()));
        source.expect_describe().return_const("results.csv".to_string());
        source
    }

    fn sink_expecting(times: usize) -> MockSnapshotSink {
        let mut sink = MockSnapshotSink::new();
        sink.expect_write_snapshot().times(times).returning(|_| Ok(()));
        sink.expect_describe().return_const("snapshot.json".to_string());
        sink
    }

    #[tokio::test]
    async fn test_run_once_writes_empty_snapshot() {
        let runner = StandingsRunner::new(source_with(vec![]), sink_expecting(1), PipelineConfig::default());

        let output = runner.run_once().await.unwrap();
        assert!(output.snapshot.teams.is_empty());
        assert!(output.snapshot.playoffs.is_none());
        assert!(output.seeding_error.is_none());
    }

    #[tokio::test]
    async fn test_seeding_failure_still_writes_unseeded_snapshot() {
        let results = vec![MatchResult::new("Duke", 24, "UVA", 17)];
        let mut sink = MockSnapshotSink::new();
        sink.expect_write_snapshot()
            .times(1)
            .withf(|snapshot| {
                snapshot.playoffs.is_none() && snapshot.rankings.is_none() && snapshot.team_count() == 2
            })
            .returning(|_| Ok(()));
        sink.expect_describe().return_const("snapshot.json".to_string());
        let runner = StandingsRunner::new(source_with(results), sink, PipelineConfig::default());

        let output = runner.run_once().await.unwrap();
        assert!(matches!(
            output.seeding_error,
            Some(SeedingError::InsufficientPoolSize { teams: 0, .. })
        ));
        assert!(output.snapshot.playoffs.is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_propagated() {
        let mut sink = MockSnapshotSink::new();
        sink.expect_write_snapshot()
            .times(1)
            .returning(|_| Err(StandingsError::config("disk full")));
        let runner = StandingsRunner::new(source_with(vec![]), sink, PipelineConfig::default());

        assert!(runner.run_once().await.is_err());
    }

    #[tokio::test]
    async fn test_source_failure_is_propagated() {
        let mut source = MockResultSource::new();
        source
            .expect_load_results()
            .returning(|| Err(StandingsError::config("unreadable")));
        let runner = StandingsRunner::new(source, sink_expecting(0), PipelineConfig::default());

        assert!(runner.run_once().await.is_err());
    }

    /// Fires `changes` times, then waits forever
    struct ScriptedTrigger {
        changes: AtomicUsize,
        processed: AtomicUsize,
    }

    impl ScriptedTrigger {
        fn new(changes: usize) -> Self {
            Self {
                changes: AtomicUsize::new(changes),
                processed: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl ChangeTrigger for ScriptedTrigger {
        async fn next_change(&self) -> StandingsResult<()> {
            let remaining = self.changes.load(Ordering::SeqCst);
            if remaining == 0 {
                std::future::pending::<()>().await;
            }
            self.changes.store(remaining - 1, Ordering::SeqCst);
            Ok(())
        }

        async fn mark_processed(&self) {
            self.processed.fetch_add(1, Ordering::SeqCst);
        }

        fn error_backoff(&self) -> Duration {
            Duration::from_millis(1)
        }
    }

    async fn watch_for<S: ResultSource, W: SnapshotSink>(
        runner: &StandingsRunner<S, W>,
        trigger: &ScriptedTrigger,
        duration: Duration,
    ) -> StandingsResult<()> {
        let (tx, rx) = mpsc::channel(1);
        let stop = async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(()).await;
        };
        let (outcome, _) = tokio::join!(runner.watch(trigger, rx), stop);
        outcome
    }

    #[tokio::test]
    async fn test_watch_runs_once_per_change() {
        let runner = StandingsRunner::new(source_with(vec![]), sink_expecting(2), PipelineConfig::default());
        let trigger = ScriptedTrigger::new(2);

        watch_for(&runner, &trigger, Duration::from_millis(50)).await.unwrap();
        assert_eq!(trigger.processed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_watch_survives_failed_runs() {
        let mut source = MockResultSource::new();
        source
            .expect_load_results()
            .returning(|| Err(StandingsError::config("unreadable")));
        source.expect_describe().return_const("results.csv".to_string());
        let runner = StandingsRunner::new(source, sink_expecting(0), PipelineConfig::default());
        let trigger = ScriptedTrigger::new(3);

        let outcome = watch_for(&runner, &trigger, Duration::from_millis(50)).await;
        assert!(outcome.is_ok());
        assert_eq!(trigger.processed.load(Ordering::SeqCst), 0);
        assert_eq!(trigger.changes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_watch_marks_unseeded_snapshots_processed() {
        let results = vec![MatchResult::new("Duke", 24, "UVA", 17)];
        let runner = StandingsRunner::new(source_with(results), sink_expecting(1), PipelineConfig::default());
        let trigger = ScriptedTrigger::new(1);

        watch_for(&runner, &trigger, Duration::from_millis(50)).await.unwrap();
        assert_eq!(trigger.processed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_watch_stops_when_sender_dropped() {
        let runner = StandingsRunner::new(source_with(vec![]), sink_expecting(0), PipelineConfig::default());
        let trigger = ScriptedTrigger::new(0);

        let (tx, rx) = mpsc::channel::<()>(1);
        drop(tx);
        assert!(runner.watch(&trigger, rx).await.is_ok());
    }

    #[tokio::test]
    async fn test_trigger_errors_do_not_end_the_loop() {
        let runner = StandingsRunner::new(source_with(vec![]), sink_expecting(0), PipelineConfig::default());

        let mut trigger = MockChangeTrigger::new();
        trigger
            .expect_next_change()
            .returning(|| Err(StandingsError::config("stat failed")));
        trigger.expect_mark_processed().never();
        trigger.expect_error_backoff().return_const(Duration::from_millis(5));

        let (tx, rx) = mpsc::channel(1);
        let stop = async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            let _ = tx.send(()).await;
        };
        let (outcome, _) = tokio::join!(runner.watch(&trigger, rx), stop);
        assert!(outcome.is_ok());
    }
}
