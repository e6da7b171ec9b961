//! First-run dataset
//!
//! Used when nothing has been persisted yet, or when the persisted document
//! cannot be read: five sample transactions, nine categories and three
//! monthly budgets.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Budget, BudgetId, BudgetPeriod, Category, Money, Snapshot, Transaction, TransactionId,
    TransactionType,
};

const SEED_CATEGORIES: [(&str, &str, &str); 9] = [
    ("1", "Income", "dollar-sign"),
    ("2", "Housing", "home"),
    ("3", "Food", "shopping-cart"),
    ("4", "Transportation", "car"),
    ("5", "Entertainment", "film"),
    ("6", "Healthcare", "activity"),
    ("7", "Education", "book"),
    ("8", "Shopping", "shopping-bag"),
    ("9", "Utilities", "zap"),
];

/// Build the seed snapshot
pub fn seed_snapshot() -> Snapshot {
    let categories: Vec<Category> = SEED_CATEGORIES
        .iter()
        .map(|(id, name, icon)| Category::new(*id, *name, *icon))
        .collect();

    let category = |id: &str| {
        categories
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .unwrap_or_else(|| Category::new(id, "", ""))
    };

    let transactions = vec![
        seed_transaction("1", 2000, "Salary", category("1"), day(1), TransactionType::Income),
        seed_transaction("2", 500, "Rent", category("2"), day(5), TransactionType::Expense),
        seed_transaction("3", 50, "Groceries", category("3"), day(10), TransactionType::Expense),
        seed_transaction("4", 30, "Gas", category("4"), day(15), TransactionType::Expense),
        seed_transaction(
            "5",
            100,
            "Freelance work",
            category("1"),
            day(20),
            TransactionType::Income,
        ),
    ];

    let budgets = vec![
        seed_budget("1", category("3"), 300, 50),
        seed_budget("2", category("2"), 800, 500),
        seed_budget("3", category("4"), 150, 30),
    ];

    Snapshot {
        transactions,
        categories,
        budgets,
    }
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn seed_transaction(
    id: &str,
    units: i64,
    description: &str,
    category: Category,
    date: DateTime<Utc>,
    kind: TransactionType,
) -> Transaction {
    Transaction {
        id: TransactionId::from(id),
        amount: Money::from_units(units),
        description: description.to_string(),
        category,
        date,
        kind,
    }
}

fn seed_budget(id: &str, category: Category, limit: i64, spent: i64) -> Budget {
    Budget {
        id: BudgetId::from(id),
        category,
        amount: Money::from_units(limit),
        period: BudgetPeriod::Monthly,
        spent: Money::from_units(spent),
    }
}
