//! Display formatting for terminal output
//!
//! Provides utilities for formatting entities and reports for the terminal.
//! Amounts use the configured currency symbol and long dates use the
//! configured date format.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::format_budget_table;
pub use category::{format_category_details, format_category_table};
pub use report::{format_dashboard, format_trend_report};
pub use transaction::{format_transaction_details, format_transaction_table};

use std::fmt::Write;

use chrono::{DateTime, Utc};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::models::{iso_date, Money};

/// Formatting preferences taken from the settings file
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

impl DisplayOptions {
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured pattern, falling back to ISO-8601
    /// when the pattern cannot be rendered
    pub fn date(&self, date: DateTime<Utc>) -> String {
        let mut output = String::new();
        match write!(output, "{}", date.format(&self.date_format)) {
            Ok(()) => output,
            Err(_) => iso_date::format(&date),
        }
    }
}

/// Render rows under a header as a bordered table
pub(crate) fn render_table<R>(header: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_options_follow_settings() {
        let settings = Settings {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let opts = DisplayOptions::from(&settings);

        assert_eq!(opts.money(Money::from_cents(1050)), "€10.50");
        assert_eq!(
            opts.date(Utc.with_ymd_and_hms(2023, 9, 5, 0, 0, 0).unwrap()),
            "05/09/2023"
        );
    }

    #[test]
    fn test_bad_date_format_falls_back_to_iso() {
        let opts = DisplayOptions {
            currency_symbol: "$".into(),
            date_format: "%Q".into(),
        };
        assert_eq!(
            opts.date(Utc.with_ymd_and_hms(2023, 9, 5, 0, 0, 0).unwrap()),
            "2023-09-05T00:00:00Z"
        );
    }

    #[test]
    fn test_default_date_format() {
        let opts = DisplayOptions::default();
        assert_eq!(
            opts.date(Utc.with_ymd_and_hms(2023, 9, 5, 0, 0, 0).unwrap()),
            "Sep 05, 2023"
        );
    }

    #[test]
    fn test_render_table_contains_cells() {
        let table = render_table(&["Name", "Icon"], vec![vec!["Food".into(), "shopping-cart".into()]]);
        assert!(table.contains("Name"));
        assert!(table.contains("shopping-cart"));
    }
}
