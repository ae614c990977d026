//! Service implementations
//!
//! Real implementations of the service traits. These handle the actual file
//! I/O around the pure pipeline.

pub mod csv_source;
pub mod polling_trigger;
pub mod roster_loader;
pub mod snapshot_writer;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use csv_source::{parse_results, CsvResultSource};
pub use polling_trigger::{PollingConfig, PollingTrigger};
pub use roster_loader::{load_roster, parse_roster};
pub use snapshot_writer::JsonSnapshotWriter;
