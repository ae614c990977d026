//! JSON snapshot writer
//!
//! Serializes the snapshot with two-space indentation and replaces the output
//! file atomically: the document is written to a sibling temp file which is
//! then renamed over the target. Readers never observe a partial document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use shared::{process_debug, ProcessId, TournamentSnapshot};

use crate::error::{StandingsError, StandingsResult};
use crate::traits::SnapshotSink;

pub struct JsonSnapshotWriter {
    path: PathBuf,
}

impl JsonSnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the target, e.g. `.tournament_data.json.tmp`
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot".to_string());
        self.path.with_file_name(format!(".{file_name}.tmp"))
    }

    /// Write `content` to the temp sibling and rename it over the target
    async fn replace_target(&self, temp_path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(temp_path).await?;
        file.write_all(content).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(temp_path, &self.path).await
    }

    fn write_error(&self, source: std::io::Error) -> StandingsError {
        StandingsError::SnapshotWriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl SnapshotSink for JsonSnapshotWriter {
    async fn write_snapshot(&self, snapshot: &TournamentSnapshot) -> StandingsResult<()> {
        let mut content = serde_json::to_string_pretty(snapshot)?;
        content.push('\n');

        let temp_path = self.temp_path();
        if let Err(e) = self.replace_target(&temp_path, content.as_bytes()).await {
            // Any stage may have left a partial temp file behind
            let _ = fs::remove_file(&temp_path).await;
            return Err(self.write_error(e));
        }

        process_debug!(
            ProcessId::current(),
            "💾 Wrote snapshot ({} teams) to {}",
            snapshot.team_count(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
