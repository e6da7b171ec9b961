//! CLI command handler for backup import
//!
//! Reads a JSON backup and replaces the whole store with it.

use std::fs;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::export::import_snapshot;
use crate::store::Store;

/// Handle the import command
pub fn handle_import_command(store: &mut Store, file: &Path) -> TrackerResult<()> {
    if !file.exists() {
        return Err(TrackerError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let content = fs::read_to_string(file)
        .map_err(|e| TrackerError::Import(format!("Failed to read file: {}", e)))?;

    let summary = import_snapshot(store, &content)?;

    println!("Data imported successfully");
    println!("  Transactions: {}", summary.transactions);
    println!("  Categories:   {}", summary.categories);
    println!("  Budgets:      {}", summary.budgets);

    Ok(())
}
