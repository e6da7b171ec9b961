//! Transaction model
//!
//! A transaction is a dated income or expense record. Its category is an
//! embedded copy taken when the transaction was written, not a reference:
//! renaming or deleting the category later leaves the copy as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::iso_date;
use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always positive; `kind` gives the direction
    pub amount: Money,

    /// What the money was for
    pub description: String,

    /// Snapshot of the category at the time of writing
    pub category: Category,

    /// When the transaction happened
    #[serde(with = "iso_date")]
    pub date: DateTime<Utc>,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign of its effect on the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {}{} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            sign,
            self.amount,
            self.category.name
        )
    }
}

/// Input for creating a transaction; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub description: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Attach the id the store generated
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            category: self.category,
            date: self.date,
            kind: self.kind,
        }
    }
}

/// Partial update for a transaction: `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub date: Option<DateTime<Utc>>,
    pub kind: Option<TransactionType>,
}

impl TransactionPatch {
    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.kind.is_none()
    }

    /// Produce the merged transaction, leaving the original untouched
    pub fn apply_to(&self, txn: &Transaction) -> Transaction {
        Transaction {
            id: txn.id.clone(),
            amount: self.amount.unwrap_or(txn.amount),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| txn.description.clone()),
            category: self.category.clone().unwrap_or_else(|| txn.category.clone()),
            date: self.date.unwrap_or(txn.date),
            kind: self.kind.unwrap_or(txn.kind),
        }
    }
}
