//! Budget display formatting

use crate::models::Budget;
use crate::reports::BudgetUsage;

use super::report::format_bar;
use super::{render_table, DisplayOptions};

const BAR_WIDTH: usize = 20;

/// Format budgets with their usage as a table
pub fn format_budget_table(budgets: &[Budget], opts: &DisplayOptions) -> String {
    if budgets.is_empty() {
        return "No budgets set yet.".to_string();
    }

    render_table(
        &["ID", "Category", "Period", "Limit", "Spent", "Remaining", "Usage", "Status"],
        budgets.iter().map(|budget| {
            let usage = BudgetUsage::for_budget(budget);
            vec![
                budget.id.to_string(),
                budget.category.name.clone(),
                budget.period.to_string(),
                opts.money(budget.amount),
                opts.money(budget.spent),
                opts.money(budget.remaining()),
                format_bar(usage.progress, 100.0, BAR_WIDTH),
                usage.status_text(&opts.currency_symbol),
            ]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_snapshot;

    #[test]
    fn test_budget_table() {
        let text = format_budget_table(&seed_snapshot().budgets, &DisplayOptions::default());
        assert!(text.contains("Transportation"));
        assert!(text.contains("17% used"));
        assert!(text.contains("63% used"));
        // Food: 300 limit, 50 spent
        assert!(text.contains("$250.00"));
    }

    #[test]
    fn test_no_budgets() {
        assert_eq!(
            format_budget_table(&[], &DisplayOptions::default()),
            "No budgets set yet."
        );
    }
}
