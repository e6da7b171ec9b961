//! Trend report
//!
//! Income and expenses over a reporting window, bucketed by a date key that
//! depends on the period (weekday, day of month, month). Buckets come out in
//! the order their key is first met while walking the stored transactions,
//! which is not necessarily calendar order.

use chrono::{DateTime, Utc};

use crate::models::{Money, Transaction, TransactionType};

use super::breakdown::{report_breakdown, CategorySlice};
use super::period::{ReportPeriod, ReportWindow, TypeFilter};
use super::summary::Totals;
use super::InsertionOrdered;

/// Sums for one bucket key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBucket {
    pub key: String,
    pub income: Money,
    pub expense: Money,
    /// income - expense
    pub total: Money,
}

impl TrendBucket {
    fn new(key: String) -> Self {
        Self {
            key,
            income: Money::zero(),
            expense: Money::zero(),
            total: Money::zero(),
        }
    }

    fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionType::Income => {
                self.income += txn.amount;
                self.total += txn.amount;
            }
            TransactionType::Expense => {
                self.expense += txn.amount;
                self.total -= txn.amount;
            }
        }
    }
}

/// Trend report for one period and type filter
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub period: ReportPeriod,
    pub filter: TypeFilter,
    pub window: ReportWindow,
    pub buckets: Vec<TrendBucket>,
    /// Totals over the filtered window
    pub totals: Totals,
    pub categories: Vec<CategorySlice>,
}

impl TrendReport {
    /// Generate the report as of `now`
    pub fn generate(
        transactions: &[Transaction],
        period: ReportPeriod,
        filter: TypeFilter,
        now: DateTime<Utc>,
    ) -> Self {
        let window = period.window(now);
        let selected = window.select(transactions, filter);

        Self {
            period,
            filter,
            window,
            buckets: bucketize(&selected, &window),
            totals: Totals::from_transactions(selected.iter().copied()),
            categories: report_breakdown(transactions, &window, filter),
        }
    }
}

fn bucketize(selected: &[&Transaction], window: &ReportWindow) -> Vec<TrendBucket> {
    let mut buckets = InsertionOrdered::new();
    for txn in selected {
        buckets
            .entry_or_insert_with(window.bucket_key(txn.date), |key| TrendBucket::new(key.clone()))
            .record(txn);
    }
    buckets.into_values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::seed_snapshot;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn txn(units: i64, kind: TransactionType, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: crate::models::TransactionId::new(),
            amount: Money::from_units(units),
            description: "x".into(),
            category: Category::new("3", "Food", "shopping-cart"),
            date,
            kind,
        }
    }

    #[test]
    fn test_monthly_buckets_on_seed() {
        let report = TrendReport::generate(
            &seed_snapshot().transactions,
            ReportPeriod::Monthly,
            TypeFilter::All,
            at(2023, 9, 28),
        );

        let keys: Vec<_> = report.buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["01", "05", "10", "15", "20"]);
        assert_eq!(report.buckets[1].total, Money::from_units(-500));
        assert_eq!(report.totals.balance, Money::from_units(1520));
        assert_eq!(report.categories.len(), 4);
    }

    #[test]
    fn test_bucket_order_is_first_seen_not_calendar() {
        let transactions = vec![
            txn(10, TransactionType::Expense, at(2023, 9, 20)),
            txn(40, TransactionType::Income, at(2023, 9, 3)),
            txn(5, TransactionType::Expense, at(2023, 9, 20)),
        ];
        let report = TrendReport::generate(
            &transactions,
            ReportPeriod::Monthly,
            TypeFilter::All,
            at(2023, 9, 21),
        );

        assert_eq!(
            report.buckets,
            vec![
                TrendBucket {
                    key: "20".into(),
                    income: Money::zero(),
                    expense: Money::from_units(15),
                    total: Money::from_units(-15),
                },
                TrendBucket {
                    key: "03".into(),
                    income: Money::from_units(40),
                    expense: Money::zero(),
                    total: Money::from_units(40),
                },
            ]
        );
    }

    #[test]
    fn test_weekly_uses_weekday_keys_and_window() {
        let transactions = vec![
            txn(10, TransactionType::Expense, at(2023, 9, 24)),
            txn(99, TransactionType::Expense, at(2023, 9, 1)),
        ];
        let report = TrendReport::generate(
            &transactions,
            ReportPeriod::Weekly,
            TypeFilter::All,
            at(2023, 9, 25),
        );
        assert_eq!(report.buckets.len(), 1);
        assert_eq!(report.buckets[0].key, "Sun");
    }

    #[test]
    fn test_yearly_merges_months_and_filters_type() {
        let transactions = vec![
            txn(10, TransactionType::Expense, at(2023, 3, 2)),
            txn(20, TransactionType::Expense, at(2023, 3, 28)),
            txn(1000, TransactionType::Income, at(2023, 3, 15)),
            txn(7, TransactionType::Expense, at(2021, 3, 1)),
        ];
        let report = TrendReport::generate(
            &transactions,
            ReportPeriod::Yearly,
            TypeFilter::Expense,
            at(2023, 9, 1),
        );

        assert_eq!(report.buckets.len(), 1);
        assert_eq!(report.buckets[0].key, "Mar");
        assert_eq!(report.buckets[0].expense, Money::from_units(30));
        assert!(report.totals.income.is_zero());
        assert_eq!(report.totals.balance, Money::from_units(-30));
    }
}
