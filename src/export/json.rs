//! JSON backup export and import
//!
//! The backup document has the same shape as the persisted state:
//! `{ "transactions": [...], "categories": [...], "budgets": [...] }` with
//! ISO-8601 dates. Importing replaces everything in the store.

use chrono::{DateTime, NaiveDate, Utc};
use log::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Snapshot;
use crate::store::Store;

/// Prefix of every backup file name
pub const BACKUP_FILE_PREFIX: &str = "expense-tracker-backup-";

/// A serialized backup ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// `expense-tracker-backup-YYYY-MM-DD.json`
    pub file_name: String,
    pub contents: String,
}

/// Collection sizes after an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub transactions: usize,
    pub categories: usize,
    pub budgets: usize,
}

/// Backup file name for a given day
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{}{}.json", BACKUP_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Serialize the whole store, naming the document after `now`'s date
pub fn export_snapshot(store: &Store, now: DateTime<Utc>) -> TrackerResult<ExportDocument> {
    let contents = serde_json::to_string_pretty(store.state())
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(ExportDocument {
        file_name: backup_file_name(now.date_naive()),
        contents,
    })
}

/// Parse a backup document without touching any store
///
/// Collections missing from the document come back empty and unknown keys
/// are ignored.
pub fn parse_snapshot(document: &str) -> TrackerResult<Snapshot> {
    serde_json::from_str(document).map_err(|e| TrackerError::Import(e.to_string()))
}

/// Replace the store's entire state with a backup document
///
/// On a parse failure the store is left exactly as it was.
pub fn import_snapshot(store: &mut Store, document: &str) -> TrackerResult<ImportSummary> {
    let snapshot = parse_snapshot(document)?;

    let summary = ImportSummary {
        transactions: snapshot.transactions.len(),
        categories: snapshot.categories.len(),
        budgets: snapshot.budgets.len(),
    };

    store.replace(snapshot);
    info!(
        "imported {} transactions, {} categories, {} budgets",
        summary.transactions, summary.categories, summary.budgets
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewTransaction, TransactionType};
    use chrono::TimeZone;

    #[test]
    fn test_backup_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 0).unwrap();
        let store = Store::in_memory();
        let document = export_snapshot(&store, now).unwrap();
        assert_eq!(document.file_name, "expense-tracker-backup-2024-03-07.json");
    }

    #[test]
    fn test_round_trip_preserves_exact_dates() {
        let mut store = Store::in_memory();
        let precise = Utc
            .with_ymd_and_hms(2023, 11, 5, 22, 41, 7)
            .unwrap()
            + chrono::Duration::milliseconds(123);
        store.add_transaction(NewTransaction {
            amount: Money::from_cents(1234),
            description: "Late snack".into(),
            category: Category::new("3", "Food", "shopping-cart"),
            date: precise,
            kind: TransactionType::Expense,
        });
        let original = store.state().clone();

        let document = export_snapshot(&store, Utc::now()).unwrap();

        let mut restored = Store::open(crate::storage::MemorySlot::new());
        restored.replace(Snapshot::default());
        import_snapshot(&mut restored, &document.contents).unwrap();

        assert_eq!(restored.state(), &original);
        assert_eq!(restored.transactions()[5].date, precise);
    }

    #[test]
    fn test_import_replaces_without_merging() {
        let mut store = Store::in_memory();
        let summary = import_snapshot(
            &mut store,
            r#"{"categories": [{"id": "x", "name": "Pets", "icon": "paw"}]}"#,
        )
        .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                transactions: 0,
                categories: 1,
                budgets: 0
            }
        );
        assert!(store.transactions().is_empty());
        assert_eq!(store.categories()[0].name, "Pets");
    }

    #[test]
    fn test_bad_document_leaves_state_alone() {
        let mut store = Store::in_memory();
        let before = store.state().clone();

        let err = import_snapshot(&mut store, "this is not json").unwrap_err();

        assert!(matches!(err, TrackerError::Import(_)));
        assert!(err.to_string().starts_with("Failed to import data. Invalid format"));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_array_documents_leave_state_alone() {
        let mut store = Store::in_memory();
        let before = store.state().clone();

        for document in ["[]", "[[],[],[]]", "42"] {
            let err = import_snapshot(&mut store, document).unwrap_err();
            assert!(matches!(err, TrackerError::Import(_)));
        }

        assert_eq!(store.state(), &before);
        assert_eq!(store.transactions().len(), 5);
    }

    #[test]
    fn test_import_accepts_plain_dates() {
        let snapshot = parse_snapshot(
            r#"{"transactions": [{"id": "t1", "amount": 12.5, "description": "Book",
                "category": {"id": "7", "name": "Education", "icon": "book"},
                "date": "2023-09-02", "type": "expense"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.transactions[0].amount, Money::from_cents(1250));
        assert_eq!(
            snapshot.transactions[0].date,
            Utc.with_ymd_and_hms(2023, 9, 2, 0, 0, 0).unwrap()
        );
    }
}
