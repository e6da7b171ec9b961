//! Category breakdowns for pie charts
//!
//! There are two breakdowns with two different color schemes. The dashboard
//! groups expenses by category id and derives a color from the id; the
//! report page groups by category name and looks the color up by name.
//! They routinely disagree for the same category and are kept separate.

use crate::models::{Money, Transaction};

use super::period::{ReportWindow, TypeFilter};
use super::InsertionOrdered;

/// Palette the dashboard colors are drawn from
pub const DASHBOARD_PALETTE: [&str; 8] = [
    "#6E59A5", "#9b87f5", "#8B5CF6", "#D946EF", "#F97316", "#0EA5E9", "#4caf50", "#ea384c",
];

/// Report color for names missing from the lookup table
pub const REPORT_FALLBACK_COLOR: &str = "#6E59A5";

/// One slice of a category pie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub name: String,
    pub value: Money,
    pub color: &'static str,
}

/// Dashboard color: sum of the id's UTF-16 code units modulo the palette size
pub fn dashboard_color(category_id: &str) -> &'static str {
    let hash: u64 = category_id.encode_utf16().map(u64::from).sum();
    DASHBOARD_PALETTE[(hash % DASHBOARD_PALETTE.len() as u64) as usize]
}

/// Report color: fixed table by category name
pub fn report_color(category_name: &str) -> &'static str {
    match category_name {
        "Income" => "#4caf50",
        "Housing" => "#6E59A5",
        "Food" => "#F97316",
        "Transportation" => "#0EA5E9",
        "Entertainment" => "#9b87f5",
        "Healthcare" => "#ea384c",
        "Education" => "#8B5CF6",
        "Shopping" => "#D946EF",
        "Utilities" => "#0EA5E9",
        _ => REPORT_FALLBACK_COLOR,
    }
}

/// Expenses grouped by embedded category id, in order of first appearance.
/// A group is named after the first transaction seen for it.
pub fn dashboard_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut groups = InsertionOrdered::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let slice = groups.entry_or_insert_with(txn.category.id.as_str(), |id| CategorySlice {
            name: txn.category.name.clone(),
            value: Money::zero(),
            color: dashboard_color(id),
        });
        slice.value += txn.amount;
    }

    groups.into_values()
}

/// Transactions inside `window` passing `filter`, grouped by category name
pub fn report_breakdown(
    transactions: &[Transaction],
    window: &ReportWindow,
    filter: TypeFilter,
) -> Vec<CategorySlice> {
    let mut groups = InsertionOrdered::new();

    for txn in window.select(transactions, filter) {
        let slice = groups.entry_or_insert_with(txn.category.name.as_str(), |name| CategorySlice {
            name: name.to_string(),
            value: Money::zero(),
            color: report_color(name),
        });
        slice.value += txn.amount;
    }

    groups.into_values()
}
