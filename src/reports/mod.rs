//! Reports module for the expense tracker
//!
//! Pure aggregation over a snapshot: dashboard totals and breakdowns,
//! time-bucketed trends, budget consumption and the transaction register.
//! Nothing here mutates state; anything that depends on the current time
//! takes `now` explicitly.

pub mod breakdown;
pub mod budget_usage;
pub mod period;
pub mod register;
pub mod summary;
pub mod trend;

pub use breakdown::{
    dashboard_breakdown, dashboard_color, report_breakdown, report_color, CategorySlice,
};
pub use budget_usage::BudgetUsage;
pub use period::{ReportPeriod, ReportWindow, TypeFilter};
pub use register::RegisterFilter;
pub use summary::{
    monthly_expenses, recent_transactions, top_categories, CategoryShare, DashboardSummary,
    MonthlyExpense, Totals, RECENT_LIMIT,
};
pub use trend::{TrendBucket, TrendReport};

use std::collections::HashMap;
use std::hash::Hash;

/// Map that iterates in first-insertion order of its keys
#[derive(Debug, Clone)]
pub(crate) struct InsertionOrdered<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> InsertionOrdered<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Value for `key`, registering it at the end with `init` if unseen
    pub(crate) fn entry_or_insert_with<F>(&mut self, key: K, init: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                let value = init(&key);
                self.index.insert(key.clone(), slot);
                self.entries.push((key, value));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub(crate) fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}
