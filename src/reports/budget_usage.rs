//! Budget consumption

use crate::models::{Budget, Money};

/// How much of a budget has been used
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    /// spent / amount * 100, rounded to two decimals
    pub percentage: f64,
    /// Percentage clamped to 100, for progress bars
    pub progress: f64,
    pub over_budget: bool,
    /// spent - amount; negative while under budget
    pub over_by: Money,
    raw_percentage: f64,
}

impl BudgetUsage {
    pub fn for_budget(budget: &Budget) -> Self {
        let raw_percentage = if budget.amount.is_positive() {
            budget.spent.cents() as f64 / budget.amount.cents() as f64 * 100.0
        } else if budget.spent.is_positive() {
            // A zero limit with anything spent is infinitely over
            f64::INFINITY
        } else {
            0.0
        };

        let percentage = if raw_percentage.is_finite() {
            (raw_percentage * 100.0).round() / 100.0
        } else {
            raw_percentage
        };

        Self {
            percentage,
            progress: raw_percentage.min(100.0),
            over_budget: raw_percentage > 100.0,
            over_by: -budget.remaining(),
            raw_percentage,
        }
    }

    /// "17% used" or "Overbudget by $50.00"
    pub fn status_text(&self, currency_symbol: &str) -> String {
        if self.over_budget {
            format!(
                "Overbudget by {}",
                self.over_by.format_with_symbol(currency_symbol)
            )
        } else {
            format!("{}% used", self.raw_percentage.round() as i64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Category};

    fn budget(limit: i64, spent: i64) -> Budget {
        Budget {
            id: "1".into(),
            category: Category::new("3", "Food", "shopping-cart"),
            amount: Money::from_units(limit),
            period: BudgetPeriod::Monthly,
            spent: Money::from_units(spent),
        }
    }

    #[test]
    fn test_under_budget() {
        let usage = BudgetUsage::for_budget(&budget(300, 50));
        assert_eq!(usage.percentage, 16.67);
        assert!(!usage.over_budget);
        assert_eq!(usage.status_text("$"), "17% used");
    }

    #[test]
    fn test_over_budget() {
        let usage = BudgetUsage::for_budget(&budget(300, 350));
        assert!(usage.over_budget);
        assert_eq!(usage.over_by, Money::from_units(50));
        assert_eq!(usage.progress, 100.0);
        assert_eq!(usage.status_text("$"), "Overbudget by $50.00");
    }

    #[test]
    fn test_exactly_at_limit_is_not_over() {
        let usage = BudgetUsage::for_budget(&budget(150, 150));
        assert_eq!(usage.percentage, 100.0);
        assert!(!usage.over_budget);
        assert_eq!(usage.status_text("$"), "100% used");
    }

    #[test]
    fn test_zero_limit() {
        assert!(!BudgetUsage::for_budget(&budget(0, 0)).over_budget);
        let usage = BudgetUsage::for_budget(&budget(0, 5));
        assert!(usage.over_budget);
        assert_eq!(usage.progress, 100.0);
        assert_eq!(usage.status_text("€"), "Overbudget by €5.00");
    }
}
