//! Core data models for the expense tracker
//!
//! This module contains the entities the store holds: categories,
//! transactions and budgets, plus their partial-update records and the
//! snapshot document that bundles them.

pub mod budget;
pub mod category;
pub mod ids;
pub mod iso_date;
pub mod money;
pub mod snapshot;
pub mod transaction;

pub use budget::{Budget, BudgetPatch, BudgetPeriod, NewBudget};
pub use category::{Category, CategoryPatch, NewCategory, INCOME_CATEGORY_NAME};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::Money;
pub use snapshot::Snapshot;
pub use transaction::{NewTransaction, Transaction, TransactionPatch, TransactionType};
