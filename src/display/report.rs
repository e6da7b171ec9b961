//! Report formatting utilities for terminal output
//!
//! Renders the dashboard and trend reports, plus small helpers for
//! percentages and bar charts.

use crate::reports::{CategorySlice, DashboardSummary, Totals, TrendReport};

use super::transaction::format_signed_amount;
use super::{render_table, DisplayOptions};

const REPORT_WIDTH: usize = 60;
const BAR_WIDTH: usize = 24;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn format_totals(totals: &Totals, opts: &DisplayOptions) -> String {
    format!(
        "Balance: {}   Income: {}   Expenses: {}\n",
        opts.money(totals.balance),
        opts.money(totals.income),
        opts.money(totals.expenses)
    )
}

fn format_slices(slices: &[CategorySlice], opts: &DisplayOptions) -> String {
    let max = slices
        .iter()
        .map(|s| s.value.cents())
        .max()
        .unwrap_or(0) as f64;

    render_table(
        &["Category", "Amount", "Color", ""],
        slices.iter().map(|slice| {
            vec![
                slice.name.clone(),
                opts.money(slice.value),
                slice.color.to_string(),
                format_bar(slice.value.cents() as f64, max, BAR_WIDTH),
            ]
        }),
    )
}

/// Format the dashboard view
pub fn format_dashboard(summary: &DashboardSummary, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_totals(&summary.totals, opts));

    output.push_str("\nExpenses by Category\n");
    if summary.breakdown.is_empty() {
        output.push_str("  No expense data to display\n");
    } else {
        output.push_str(&format_slices(&summary.breakdown, opts));
        output.push('\n');
    }

    output.push_str("\nMonthly Expenses\n");
    if summary.monthly.is_empty() {
        output.push_str("  No expense data to display\n");
    } else {
        let max = summary
            .monthly
            .iter()
            .map(|m| m.amount.cents())
            .max()
            .unwrap_or(0) as f64;
        for month in &summary.monthly {
            output.push_str(&format!(
                "  {:<4} {} {}\n",
                month.month,
                format_bar(month.amount.cents() as f64, max, BAR_WIDTH),
                opts.money(month.amount)
            ));
        }
    }

    output.push_str("\nRecent Transactions\n");
    if summary.recent.is_empty() {
        output.push_str("  No transactions yet\n");
    } else {
        for txn in &summary.recent {
            output.push_str(&format!(
                "  {:<24} {} • {:<16} {:>12}\n",
                txn.description,
                opts.date(txn.date),
                txn.category.name,
                format_signed_amount(txn, opts)
            ));
        }
    }

    output.push_str("\nTop Spending Categories\n");
    for share in &summary.top_categories {
        output.push_str(&format!(
            "  {:<16} {:>12} {:>6}\n",
            share.name,
            opts.money(share.amount),
            format_percentage(share.percentage)
        ));
    }

    output
}

/// Format a trend report
pub fn format_trend_report(report: &TrendReport, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} Report ({})\n",
        report.period,
        report.filter.as_str()
    ));
    output.push_str(&format!(
        "{} to {}\n",
        opts.date(report.window.start),
        opts.date(report.window.end)
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_totals(&report.totals, opts));

    output.push_str("\nTrend\n");
    if report.buckets.is_empty() {
        output.push_str("  No data for this period\n");
    } else {
        output.push_str(&render_table(
            &["Period", "Income", "Expense", "Net"],
            report.buckets.iter().map(|bucket| {
                vec![
                    bucket.key.clone(),
                    opts.money(bucket.income),
                    opts.money(bucket.expense),
                    opts.money(bucket.total),
                ]
            }),
        ));
        output.push('\n');
    }

    output.push_str("\nBy Category\n");
    if report.categories.is_empty() {
        output.push_str("  No data for this period\n");
    } else {
        output.push_str(&format_slices(&report.categories, opts));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{ReportPeriod, TypeFilter};
    use crate::storage::seed_snapshot;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(8.62), "8.6%");
        assert_eq!(format_percentage(86.21), "86%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 2), "░░");
    }

    #[test]
    fn test_dashboard_text() {
        let summary = DashboardSummary::generate(&seed_snapshot());
        let text = format_dashboard(&summary, &DisplayOptions::default());

        assert!(text.contains("Balance: $1520.00"));
        assert!(text.contains("Housing"));
        assert!(text.contains("Sep"));
        assert!(text.contains("+$100.00"));
    }

    #[test]
    fn test_trend_report_text() {
        let seed = seed_snapshot();
        let report = TrendReport::generate(
            &seed.transactions,
            ReportPeriod::Monthly,
            TypeFilter::Expense,
            Utc.with_ymd_and_hms(2023, 9, 28, 0, 0, 0).unwrap(),
        );
        let text = format_trend_report(&report, &DisplayOptions::default());

        assert!(text.starts_with("Monthly Report (expense)"));
        assert!(text.contains("Sep 01, 2023 to Sep 30, 2023"));
        assert!(text.contains("Expenses: $580.00"));
        assert!(text.contains("Income: $0.00"));
    }

    #[test]
    fn test_empty_trend_report() {
        let report = TrendReport::generate(
            &[],
            ReportPeriod::Weekly,
            TypeFilter::All,
            Utc.with_ymd_and_hms(2023, 9, 28, 0, 0, 0).unwrap(),
        );
        let text = format_trend_report(&report, &DisplayOptions::default());
        assert!(text.contains("No data for this period"));
    }
}
