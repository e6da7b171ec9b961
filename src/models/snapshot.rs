//! Snapshot: the full state of all three collections at one point in time
//!
//! This is also the document shape that is persisted, exported and imported:
//! `{ "transactions": [...], "categories": [...], "budgets": [...] }`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::budget::Budget;
use super::category::Category;
use super::transaction::Transaction;

/// Only a JSON object is accepted; a sequence never reads as a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
}

#[derive(Deserialize)]
struct SnapshotFields {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    budgets: Vec<Budget>,
}

impl TryFrom<Map<String, Value>> for Snapshot {
    type Error = serde_json::Error;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: SnapshotFields = serde_json::from_value(Value::Object(document))?;
        Ok(Self {
            transactions: fields.transactions,
            categories: fields.categories,
            budgets: fields.budgets,
        })
    }
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.categories.is_empty() && self.budgets.is_empty()
    }
}
