//! Budget service
//!
//! Provides business logic for budget management. A budget's `spent` figure
//! is entered by hand through [`BudgetService::set_spent`]; nothing here
//! derives it from transactions.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Budget, BudgetId, BudgetPatch, BudgetPeriod, Category, CategoryId, Money, NewBudget,
    INCOME_CATEGORY_NAME,
};
use crate::store::Store;

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a mut Store,
}

/// Fields to change on an existing budget
#[derive(Debug, Clone, Default)]
pub struct BudgetUpdate {
    pub category_id: Option<CategoryId>,
    pub amount: Option<Money>,
    pub period: Option<BudgetPeriod>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Create a budget with nothing spent
    pub fn create(
        &mut self,
        category_id: &CategoryId,
        amount: Money,
        period: BudgetPeriod,
    ) -> TrackerResult<Budget> {
        let category = self.resolve_category(category_id)?;
        validate_limit(amount)?;

        let id = self.store.add_budget(NewBudget {
            category,
            amount,
            period,
        });

        self.store
            .find_budget(&id)
            .cloned()
            .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))
    }

    /// Update a budget. Returns `None` when no budget has `id`.
    pub fn update(&mut self, id: &BudgetId, update: BudgetUpdate) -> TrackerResult<Option<Budget>> {
        if self.store.find_budget(id).is_none() {
            return Ok(None);
        }

        let category = update
            .category_id
            .as_ref()
            .map(|category_id| self.resolve_category(category_id))
            .transpose()?;
        if let Some(amount) = update.amount {
            validate_limit(amount)?;
        }

        self.store.update_budget(
            id,
            BudgetPatch {
                category,
                amount: update.amount,
                period: update.period,
                spent: None,
            },
        );

        Ok(self.store.find_budget(id).cloned())
    }

    /// Record how much has been spent against a budget
    pub fn set_spent(&mut self, id: &BudgetId, spent: Money) -> TrackerResult<Option<Budget>> {
        if spent.is_negative() {
            return Err(TrackerError::Validation(
                "Spent amount cannot be negative".into(),
            ));
        }

        let outcome = self.store.update_budget(
            id,
            BudgetPatch {
                spent: Some(spent),
                ..Default::default()
            },
        );

        if !outcome.is_applied() {
            return Ok(None);
        }
        Ok(self.store.find_budget(id).cloned())
    }

    /// Delete a budget. Returns false if there was nothing to delete.
    pub fn delete(&mut self, id: &BudgetId) -> bool {
        self.store.delete_budget(id).is_applied()
    }

    /// Get a budget by id
    pub fn get(&self, id: &BudgetId) -> Option<&Budget> {
        self.store.find_budget(id)
    }

    /// All budgets in stored order
    pub fn list(&self) -> &[Budget] {
        self.store.budgets()
    }

    fn resolve_category(&self, id: &CategoryId) -> TrackerResult<Category> {
        let category = self
            .store
            .find_category(id)
            .cloned()
            .ok_or_else(|| TrackerError::Validation("Please select a valid category".into()))?;

        // Limits apply to spending, so the income category is never offered
        if category.is_reserved() {
            return Err(TrackerError::Validation(format!(
                "The {} category cannot have a budget",
                INCOME_CATEGORY_NAME
            )));
        }
        Ok(category)
    }
}

fn validate_limit(amount: Money) -> TrackerResult<()> {
    if !amount.is_positive() {
        return Err(TrackerError::Validation(
            "Budget amount must be greater than zero".into(),
        ));
    }
    Ok(())
}
