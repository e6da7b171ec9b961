//! Storage layer for the expense tracker
//!
//! Provides atomic JSON file I/O, the durable slot the store persists its
//! snapshot into, and the dataset used on first run.

pub mod file_io;
pub mod seed;
pub mod slot;

pub use file_io::{read_json_optional, write_json_atomic};
pub use seed::seed_snapshot;
pub use slot::{JsonFileSlot, MemorySlot, StateSlot};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;

/// Open the on-disk slot for an installation, creating its directories
pub fn open_file_slot(paths: &TrackerPaths) -> TrackerResult<JsonFileSlot> {
    paths.ensure_directories()?;
    Ok(JsonFileSlot::new(paths.store_file()))
}
