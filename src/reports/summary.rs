//! Dashboard summary
//!
//! Balance totals, the most recent transactions, expenses per month and the
//! share each category takes of total expenses.

use crate::models::{Money, Snapshot, Transaction};

use super::breakdown::{dashboard_breakdown, CategorySlice};
use super::InsertionOrdered;

/// How many transactions the recent list shows
pub const RECENT_LIMIT: usize = 5;

/// Income, expense and balance over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

impl Totals {
    pub fn from_transactions<'t, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'t Transaction>,
    {
        let mut totals = Self::default();
        for txn in transactions {
            if txn.is_income() {
                totals.income += txn.amount;
            } else {
                totals.expenses += txn.amount;
            }
        }
        totals.balance = totals.income - totals.expenses;
        totals
    }
}

/// Expense total for one month abbreviation ("Sep")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyExpense {
    pub month: String,
    pub amount: Money,
}

/// A category's expense total and its share of all expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub amount: Money,
    pub color: &'static str,
    /// 0-100
    pub percentage: f64,
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub totals: Totals,
    pub recent: Vec<Transaction>,
    pub breakdown: Vec<CategorySlice>,
    pub monthly: Vec<MonthlyExpense>,
    pub top_categories: Vec<CategoryShare>,
}

impl DashboardSummary {
    pub fn generate(snapshot: &Snapshot) -> Self {
        let transactions = &snapshot.transactions;
        let totals = Totals::from_transactions(transactions);
        let breakdown = dashboard_breakdown(transactions);
        let top_categories = top_categories(&breakdown, totals.expenses);

        Self {
            totals,
            recent: recent_transactions(transactions, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            breakdown,
            monthly: monthly_expenses(transactions),
            top_categories,
        }
    }
}

/// Newest first, at most `limit`. Equal dates keep their stored order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Expenses summed per month abbreviation over all time, keyed in order of
/// first appearance. Different years share a key.
pub fn monthly_expenses(transactions: &[Transaction]) -> Vec<MonthlyExpense> {
    let mut months = InsertionOrdered::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let month = txn.date.format("%b").to_string();
        let entry = months.entry_or_insert_with(month, |month| MonthlyExpense {
            month: month.clone(),
            amount: Money::zero(),
        });
        entry.amount += txn.amount;
    }

    months.into_values()
}

/// Each breakdown slice with its percentage of `total_expenses`
pub fn top_categories(breakdown: &[CategorySlice], total_expenses: Money) -> Vec<CategoryShare> {
    breakdown
        .iter()
        .map(|slice| CategoryShare {
            name: slice.name.clone(),
            amount: slice.value,
            color: slice.color,
            percentage: if total_expenses.is_zero() {
                0.0
            } else {
                slice.value.cents() as f64 / total_expenses.cents() as f64 * 100.0
            },
        })
        .collect()
}
