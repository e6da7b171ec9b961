//! Export module for the expense tracker
//!
//! - JSON: full backup and wholesale restore
//! - CSV: transactions, for spreadsheets
//! - YAML: human-readable copy of the full snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{
    backup_file_name, export_snapshot, import_snapshot, parse_snapshot, ExportDocument,
    ImportSummary, BACKUP_FILE_PREFIX,
};
pub use self::yaml::export_snapshot_yaml;
