//! Modification-time polling trigger
//!
//! Polls the results file's mtime. A change is pending whenever the current
//! mtime differs from the last acknowledged one, or nothing has been
//! acknowledged yet. Only `mark_processed` moves the acknowledged mtime, so a
//! failed run leaves the change pending and the next poll retries it.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use tokio::sync::Mutex;

use shared::logging::local_clock;
use shared::{process_info, process_warn, ProcessId};

use crate::error::StandingsResult;
use crate::traits::ChangeTrigger;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_ABSENT_BACKOFF: Duration = Duration::from_secs(5);
pub const DEFAULT_ERROR_BACKOFF: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Delay between checks while the file exists
    pub poll_interval: Duration,
    /// Delay between checks while the file is missing
    pub absent_backoff: Duration,
    /// Delay after a stat failure or a failed run
    pub error_backoff: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            absent_backoff: DEFAULT_ABSENT_BACKOFF,
            error_backoff: DEFAULT_ERROR_BACKOFF,
        }
    }
}

#[derive(Debug, Default)]
struct TriggerState {
    /// mtime of the last successfully processed version
    processed: Option<SystemTime>,
    /// mtime observed by the last `next_change`
    pending: Option<SystemTime>,
    /// set while the file is missing so the wait is only announced once
    waiting_for_file: bool,
}

pub struct PollingTrigger {
    path: PathBuf,
    config: PollingConfig,
    state: Mutex<TriggerState>,
}

impl PollingTrigger {
    pub fn new(path: impl Into<PathBuf>, config: PollingConfig) -> Self {
        Self {
            path: path.into(),
            config,
            state: Mutex::new(TriggerState::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &PollingConfig {
        &self.config
    }

    /// One poll: `Some(mtime)` when a change is pending, otherwise the delay
    /// before the next poll.
    async fn check(&self) -> Result<SystemTime, Duration> {
        let modified = match tokio::fs::metadata(&self.path).await.and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let mut state = self.state.lock().await;
                if !state.waiting_for_file {
                    state.waiting_for_file = true;
                    process_info!(
                        ProcessId::current(),
                        "⏳ Waiting for results file at {}",
                        self.path.display()
                    );
                }
                return Err(self.config.absent_backoff);
            }
            Err(e) => {
                process_warn!(
                    ProcessId::current(),
                    "⚠️ Cannot stat {}: {}",
                    self.path.display(),
                    e
                );
                return Err(self.config.error_backoff);
            }
        };

        let mut state = self.state.lock().await;
        state.waiting_for_file = false;
        if state.processed == Some(modified) {
            return Err(self.config.poll_interval);
        }
        state.pending = Some(modified);
        Ok(modified)
    }
}

#[async_trait]
impl ChangeTrigger for PollingTrigger {
    async fn next_change(&self) -> StandingsResult<()> {
        loop {
            match self.check().await {
                Ok(_) => {
                    process_info!(
                        ProcessId::current(),
                        "📝 Results file updated at {}",
                        local_clock()
                    );
                    return Ok(());
                }
                Err(delay) => tokio::time::sleep(delay).await,
            }
        }
    }

    async fn mark_processed(&self) {
        let mut state = self.state.lock().await;
        if let Some(pending) = state.pending.take() {
            state.processed = Some(pending);
        }
    }

    fn error_backoff(&self) -> Duration {
        self.config.error_backoff
    }
}
