//! YAML export of the full snapshot
//!
//! Human-readable copy of all three collections, same field names as the
//! JSON backup.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Snapshot;

/// Write the snapshot as YAML with a short header comment
pub fn export_snapshot_yaml<W: Write>(
    snapshot: &Snapshot,
    generated_at: DateTime<Utc>,
    writer: &mut W,
) -> TrackerResult<()> {
    writeln!(writer, "# Expense Tracker Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", generated_at.to_rfc3339()))
        .and_then(|_| writeln!(writer))
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, snapshot).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_snapshot;

    #[test]
    fn test_yaml_export_reads_back() {
        let seed = seed_snapshot();
        let mut out = Vec::new();
        export_snapshot_yaml(&seed, Utc::now(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Expense Tracker Export"));
        assert!(text.contains("name: Transportation"));

        let parsed: Snapshot = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, seed);
    }
}
