//! Service-specific tests
//!
//! Each service has its own test file; filesystem tests run inside a fresh
//! temp directory.


// Common test utilities for services
#[cfg(test)]
pub mod common {
    use std::time::Duration;
    use tokio::time::timeout;

    use crate::services::PollingConfig;

    /// Standard timeout for async operations in tests
    pub const TEST_TIMEOUT: Duration = Duration::from_millis(500);

    /// Helper to run async operations with timeout
    pub async fn with_timeout<T, F>(future: F) -> Result<T, tokio::time::error::Elapsed>
    where
        F: std::future::Future<Output = T>,
    {
        timeout(TEST_TIMEOUT, future).await
    }

    /// Polling intervals short enough for tests
    pub fn fast_polling() -> PollingConfig {
        PollingConfig {
            poll_interval: Duration::from_millis(5),
            absent_backoff: Duration::from_millis(10),
            error_backoff: Duration::from_millis(10),
        }
    }

    pub const RESULTS_HEADER: &str = "Team 1,Score 1,Team 2,Score 2\n";
}
