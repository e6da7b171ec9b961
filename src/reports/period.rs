//! Reporting periods, type filters and the date windows they select

use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};

/// Reporting period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// strftime pattern naming the bucket a transaction falls into
    pub fn bucket_format(&self) -> &'static str {
        match self {
            Self::Weekly => "%a",
            Self::Monthly => "%d",
            Self::Yearly => "%b",
        }
    }

    /// The window this period covers as of `now`
    ///
    /// - weekly: the last 7 days up to `now`
    /// - monthly: the whole calendar month containing `now`
    /// - yearly: the last 12 months up to `now`
    pub fn window(&self, now: DateTime<Utc>) -> ReportWindow {
        let (start, end) = match self {
            Self::Weekly => (now - Duration::days(7), now),
            Self::Monthly => {
                let today = now.date_naive();
                let first = today.with_day(1).unwrap_or(today);
                let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
                (
                    first.and_time(NaiveTime::MIN).and_utc(),
                    next.and_time(NaiveTime::MIN).and_utc() - Duration::nanoseconds(1),
                )
            }
            Self::Yearly => (
                now.checked_sub_months(Months::new(12)).unwrap_or(now),
                now,
            ),
        };

        ReportWindow {
            start,
            end,
            bucket_format: self.bucket_format(),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            other => Err(format!(
                "unknown period '{}' (expected weekly, monthly or yearly)",
                other
            )),
        }
    }
}

/// Which transaction types a view includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            other => Err(format!(
                "unknown type '{}' (expected all, income or expense)",
                other
            )),
        }
    }
}

/// An inclusive date window plus the bucket key format used inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub bucket_format: &'static str,
}

impl ReportWindow {
    /// Both ends inclusive
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }

    /// Bucket key for a transaction date
    pub fn bucket_key(&self, date: DateTime<Utc>) -> String {
        date.format(self.bucket_format).to_string()
    }

    /// Transactions inside the window that pass `filter`, in stored order
    pub fn select<'t>(&self, transactions: &'t [Transaction], filter: TypeFilter) -> Vec<&'t Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date) && filter.matches(t.kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 9, 25, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_weekly_window() {
        let window = ReportPeriod::Weekly.window(now());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2023, 9, 18, 15, 0, 0).unwrap());
        assert_eq!(window.end, now());
        assert_eq!(window.bucket_key(now()), "Mon");
    }

    #[test]
    fn test_monthly_window_covers_calendar_month() {
        let window = ReportPeriod::Monthly.window(now());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2023, 9, 30, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap()));
        assert_eq!(window.bucket_key(now()), "25");
    }

    #[test]
    fn test_monthly_window_in_december() {
        let window = ReportPeriod::Monthly.window(Utc.with_ymd_and_hms(2023, 12, 31, 8, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_yearly_window() {
        let window = ReportPeriod::Yearly.window(now());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2022, 9, 25, 15, 0, 0).unwrap());
        assert_eq!(window.bucket_key(now()), "Sep");
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!("Weekly".parse::<ReportPeriod>().unwrap(), ReportPeriod::Weekly);
        assert!("daily".parse::<ReportPeriod>().is_err());
        assert_eq!("expense".parse::<TypeFilter>().unwrap(), TypeFilter::Expense);
        assert!(TypeFilter::All.matches(TransactionType::Income));
        assert!(!TypeFilter::Income.matches(TransactionType::Expense));
    }
}
