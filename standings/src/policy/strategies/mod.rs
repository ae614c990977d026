//! Concrete policy implementations

pub mod alphabetical;
pub mod roster;
pub mod scoreless;

pub use alphabetical::AlphabeticalSplit;
pub use roster::StaticRoster;
pub use scoreless::{CountAll, SkipScoreless};
