//! Transaction service
//!
//! Validates transaction input the way the entry form does before anything
//! reaches the store: a description, a positive amount and a category that
//! exists. The category found is embedded into the transaction as a copy.

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Category, CategoryId, Money, NewTransaction, Transaction, TransactionId, TransactionPatch,
    TransactionType,
};
use crate::store::Store;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a mut Store,
}

/// Raw form input for a new transaction
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub amount: Money,
    pub description: String,
    pub category_id: CategoryId,
    pub date: DateTime<Utc>,
    pub kind: TransactionType,
}

/// Fields to change on an existing transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub date: Option<DateTime<Utc>>,
    pub kind: Option<TransactionType>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Validate and record a transaction
    pub fn create(&mut self, input: TransactionInput) -> TrackerResult<Transaction> {
        let description = validate_description(&input.description)?;
        validate_amount(input.amount)?;
        let category = self.resolve_category(&input.category_id)?;

        let id = self.store.add_transaction(NewTransaction {
            amount: input.amount,
            description,
            category,
            date: input.date,
            kind: input.kind,
        });

        self.store
            .find_transaction(&id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))
    }

    /// Validate and apply an edit. Returns `None` when no transaction has `id`.
    pub fn update(
        &mut self,
        id: &TransactionId,
        update: TransactionUpdate,
    ) -> TrackerResult<Option<Transaction>> {
        if self.store.find_transaction(id).is_none() {
            return Ok(None);
        }

        let description = update
            .description
            .as_deref()
            .map(validate_description)
            .transpose()?;
        if let Some(amount) = update.amount {
            validate_amount(amount)?;
        }
        let category = update
            .category_id
            .as_ref()
            .map(|category_id| self.resolve_category(category_id))
            .transpose()?;

        self.store.update_transaction(
            id,
            TransactionPatch {
                amount: update.amount,
                description,
                category,
                date: update.date,
                kind: update.kind,
            },
        );

        Ok(self.store.find_transaction(id).cloned())
    }

    /// Delete a transaction. Returns false if there was nothing to delete.
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        self.store.delete_transaction(id).is_applied()
    }

    /// Get a transaction by id
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.store.find_transaction(id)
    }

    /// All transactions in stored order
    pub fn list(&self) -> &[Transaction] {
        self.store.transactions()
    }

    fn resolve_category(&self, id: &CategoryId) -> TrackerResult<Category> {
        self.store
            .find_category(id)
            .cloned()
            .ok_or_else(|| TrackerError::Validation("Please select a valid category".into()))
    }
}

fn validate_description(description: &str) -> TrackerResult<String> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TrackerError::Validation("Please fill in all fields".into()));
    }
    Ok(description.to_string())
}

fn validate_amount(amount: Money) -> TrackerResult<()> {
    if !amount.is_positive() {
        return Err(TrackerError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(())
}
