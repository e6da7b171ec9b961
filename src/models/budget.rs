//! Budget model
//!
//! A budget is a spending limit for a category over a period. `spent` is a
//! manually maintained figure: it starts at zero and only changes through
//! explicit updates, it is never derived from transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;

/// How often a budget limit resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
        }
    }
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Snapshot of the category at the time of writing
    pub category: Category,

    /// The limit
    pub amount: Money,

    /// Reset period
    pub period: BudgetPeriod,

    /// Amount recorded as spent so far
    pub spent: Money,
}

impl Budget {
    /// Remaining allowance; negative when over budget
    pub fn remaining(&self) -> Money {
        self.amount - self.spent
    }
}

/// Input for creating a budget. There is no `spent` field: new budgets
/// always start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBudget {
    pub category: Category,
    pub amount: Money,
    pub period: BudgetPeriod,
}

impl NewBudget {
    /// Attach the id the store generated
    pub fn into_budget(self, id: BudgetId) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            period: self.period,
            spent: Money::zero(),
        }
    }
}

/// Partial update for a budget: `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetPatch {
    pub category: Option<Category>,
    pub amount: Option<Money>,
    pub period: Option<BudgetPeriod>,
    pub spent: Option<Money>,
}

impl BudgetPatch {
    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.amount.is_none()
            && self.period.is_none()
            && self.spent.is_none()
    }

    /// Produce the merged budget, leaving the original untouched
    pub fn apply_to(&self, budget: &Budget) -> Budget {
        Budget {
            id: budget.id.clone(),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| budget.category.clone()),
            amount: self.amount.unwrap_or(budget.amount),
            period: self.period.unwrap_or(budget.period),
            spent: self.spent.unwrap_or(budget.spent),
        }
    }
}
