//! Durable state slot
//!
//! The store persists its whole snapshot into a single named slot after every
//! mutation and reads it back once at startup. `StateSlot` is the seam the
//! store is built against; `JsonFileSlot` is the real on-disk slot and
//! `MemorySlot` keeps the document in memory for tests and embedding.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Snapshot;

use super::file_io::{read_json_optional, write_json_atomic};

/// A named durable location holding one snapshot document
pub trait StateSlot {
    /// Read the stored snapshot. `Ok(None)` means nothing was stored yet.
    fn load(&self) -> TrackerResult<Option<Snapshot>>;

    /// Replace the stored snapshot
    fn save(&self, snapshot: &Snapshot) -> TrackerResult<()>;
}

/// Slot backed by a JSON file, written atomically
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StateSlot for JsonFileSlot {
    fn load(&self) -> TrackerResult<Option<Snapshot>> {
        read_json_optional(&self.path)
    }

    fn save(&self, snapshot: &Snapshot) -> TrackerResult<()> {
        write_json_atomic(&self.path, snapshot)
    }
}

/// In-memory slot holding the serialized document text
///
/// Clones share the same document, so a test can keep one handle while the
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    document: Rc<RefCell<Option<String>>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `document` (which may be malformed)
    pub fn with_document(document: impl Into<String>) -> Self {
        let slot = Self::default();
        *slot.document.borrow_mut() = Some(document.into());
        slot
    }

    /// Current document text, if anything was written
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Make subsequent writes fail, simulating a full or read-only disk
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl StateSlot for MemorySlot {
    fn load(&self) -> TrackerResult<Option<Snapshot>> {
        match self.document.borrow().as_deref() {
            None => Ok(None),
            Some(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(|e| TrackerError::Storage(format!("Failed to parse slot: {}", e))),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> TrackerResult<()> {
        if *self.fail_writes.borrow() {
            return Err(TrackerError::Storage("slot is not writable".into()));
        }
        let text = serde_json::to_string(snapshot)?;
        *self.document.borrow_mut() = Some(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::seed_snapshot;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let slot = JsonFileSlot::new(temp_dir.path().join("data").join("expense-store.json"));

        assert!(slot.load().unwrap().is_none());

        let snapshot = seed_snapshot();
        slot.save(&snapshot).unwrap();
        assert_eq!(slot.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_file_slot_corrupt_document_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense-store.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let slot = JsonFileSlot::new(path);
        assert!(slot.load().is_err());
    }

    #[test]
    fn test_file_slot_writes_iso_dates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense-store.json");
        let slot = JsonFileSlot::new(path.clone());
        slot.save(&seed_snapshot()).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("\"date\": \"2023-09-01T00:00:00Z\""));
    }

    #[test]
    fn test_memory_slot_shares_document_between_clones() {
        let slot = MemorySlot::new();
        let handle = slot.clone();
        slot.save(&Snapshot::default()).unwrap();
        assert!(handle.document().is_some());
    }

    #[test]
    fn test_memory_slot_write_failure() {
        let slot = MemorySlot::new();
        slot.set_fail_writes(true);
        assert!(slot.save(&Snapshot::default()).is_err());
        assert!(slot.document().is_none());
    }
}
