//! Transaction register
//!
//! The searchable, filterable transaction list.

use crate::models::{CategoryId, Transaction};

use super::period::TypeFilter;

/// Filter options for the register
#[derive(Debug, Clone, Default)]
pub struct RegisterFilter {
    /// Matches a description substring (ignoring case) or the amount's text
    pub search: Option<String>,
    /// Filter by embedded category id
    pub category_id: Option<CategoryId>,
    /// Filter by type
    pub kind: TypeFilter,
}

impl RegisterFilter {
    /// Check if a transaction matches this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(ref search) = self.search {
            let matches_search = txn
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
                || txn.amount.to_plain_string().contains(search.as_str());
            if !matches_search {
                return false;
            }
        }

        if let Some(ref category_id) = self.category_id {
            if &txn.category.id != category_id {
                return false;
            }
        }

        self.kind.matches(txn.kind)
    }

    /// Matching transactions, newest first (stable on equal dates)
    pub fn apply<'t>(&self, transactions: &'t [Transaction]) -> Vec<&'t Transaction> {
        let mut entries: Vec<&Transaction> =
            transactions.iter().filter(|t| self.matches(t)).collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_snapshot;

    fn descriptions(filter: &RegisterFilter) -> Vec<String> {
        let seed = seed_snapshot();
        filter
            .apply(&seed.transactions)
            .iter()
            .map(|t| t.description.clone())
            .collect()
    }

    #[test]
    fn test_no_filter_sorts_newest_first() {
        assert_eq!(
            descriptions(&RegisterFilter::default()),
            vec!["Freelance work", "Gas", "Groceries", "Rent", "Salary"]
        );
    }

    #[test]
    fn test_search_description_ignores_case() {
        let filter = RegisterFilter {
            search: Some("GROC".into()),
            ..Default::default()
        };
        assert_eq!(descriptions(&filter), vec!["Groceries"]);
    }

    #[test]
    fn test_search_matches_amount_text() {
        let filter = RegisterFilter {
            search: Some("50".into()),
            ..Default::default()
        };
        // 500 (Rent) and 50 (Groceries)
        assert_eq!(descriptions(&filter), vec!["Groceries", "Rent"]);
    }

    #[test]
    fn test_category_and_type_filters() {
        let filter = RegisterFilter {
            category_id: Some("1".into()),
            kind: TypeFilter::Income,
            ..Default::default()
        };
        assert_eq!(descriptions(&filter), vec!["Freelance work", "Salary"]);

        let filter = RegisterFilter {
            category_id: Some("1".into()),
            kind: TypeFilter::Expense,
            ..Default::default()
        };
        assert!(descriptions(&filter).is_empty());
    }
}
