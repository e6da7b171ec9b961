//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and services.

pub mod budget;
pub mod category;
pub mod export;
pub mod import;
pub mod report;
pub mod session;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::handle_import_command;
pub use report::{handle_dashboard_command, handle_report_command, ReportArgs};
pub use session::{handle_login_command, handle_logout_command, handle_whoami_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{iso_date, BudgetPeriod, Money, TransactionType};

/// Transaction type as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionType::Income,
            KindArg::Expense => TransactionType::Expense,
        }
    }
}

/// Budget period as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Daily,
    Weekly,
    Monthly,
}

impl From<PeriodArg> for BudgetPeriod {
    fn from(period: PeriodArg) -> Self {
        match period {
            PeriodArg::Daily => BudgetPeriod::Daily,
            PeriodArg::Weekly => BudgetPeriod::Weekly,
            PeriodArg::Monthly => BudgetPeriod::Monthly,
        }
    }
}

/// Parse an amount argument (e.g. "12.50" or "$12.50")
pub(crate) fn parse_amount(s: &str) -> TrackerResult<Money> {
    Money::parse(s).map_err(|e| TrackerError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a date argument: `YYYY-MM-DD` or a full ISO-8601 timestamp
pub(crate) fn parse_date(s: &str) -> TrackerResult<DateTime<Utc>> {
    iso_date::parse(s).ok_or_else(|| {
        TrackerError::Validation(format!("Invalid date: {} (expected YYYY-MM-DD)", s))
    })
}
