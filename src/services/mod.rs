//! Service layer for the expense tracker
//!
//! The service layer validates user intents before they become store
//! mutations, and turns rejections into user-facing messages.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{BudgetService, BudgetUpdate};
pub use category::{CategoryService, CategoryUpdate, DEFAULT_CATEGORY_ICON};
pub use transaction::{TransactionInput, TransactionService, TransactionUpdate};
