//! CSV export of transactions
//!
//! Spreadsheet-friendly listing: one row per transaction in stored order.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 5] = ["Date", "Description", "Category", "Type", "Amount"];

/// Write all transactions as CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER).map_err(csv_error)?;

    for txn in transactions {
        wtr.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.category.name.clone(),
            txn.kind.as_str().to_string(),
            txn.amount.format_with_symbol(""),
        ])
        .map_err(csv_error)?;
    }

    wtr.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

fn csv_error(e: csv::Error) -> TrackerError {
    TrackerError::Export(e.to_string())
}
