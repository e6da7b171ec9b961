//! Mutations the store accepts and the outcomes it reports

use crate::models::{
    Budget, BudgetId, BudgetPatch, Category, CategoryId, CategoryPatch, Snapshot, Transaction,
    TransactionId, TransactionPatch,
};

/// A single state change. Every write goes through [`Store::dispatch`].
///
/// [`Store::dispatch`]: super::Store::dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddTransaction(Transaction),
    UpdateTransaction(TransactionId, TransactionPatch),
    DeleteTransaction(TransactionId),

    AddCategory(Category),
    UpdateCategory(CategoryId, CategoryPatch),
    DeleteCategory(CategoryId),

    /// Appended with `spent` reset to zero
    AddBudget(Budget),
    UpdateBudget(BudgetId, BudgetPatch),
    DeleteBudget(BudgetId),

    /// Wholesale replacement of all three collections
    Replace(Snapshot),
}

impl Mutation {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddTransaction(_) => "add_transaction",
            Self::UpdateTransaction(..) => "update_transaction",
            Self::DeleteTransaction(_) => "delete_transaction",
            Self::AddCategory(_) => "add_category",
            Self::UpdateCategory(..) => "update_category",
            Self::DeleteCategory(_) => "delete_category",
            Self::AddBudget(_) => "add_budget",
            Self::UpdateBudget(..) => "update_budget",
            Self::DeleteBudget(_) => "delete_budget",
            Self::Replace(_) => "replace",
        }
    }
}

/// What a dispatched mutation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; it was persisted and listeners were notified
    Applied,
    /// No entity with that id; state untouched
    NotFound,
    /// The target is reserved and was left alone
    Protected,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
