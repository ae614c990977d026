//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the standings test suites.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{RunnerBuilder, TestHelpers};
