//! Report CLI commands
//!
//! The dashboard overview and the period trend report.

use chrono::Utc;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_trend_report, DisplayOptions};
use crate::error::TrackerResult;
use crate::reports::{DashboardSummary, ReportPeriod, TrendReport, TypeFilter};
use crate::store::Store;

/// Options for the trend report
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Reporting window: weekly, monthly or yearly
    #[arg(short, long, default_value = "monthly")]
    pub period: ReportPeriod,

    /// Which transactions to include: all, income or expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: TypeFilter,
}

/// Print the dashboard
pub fn handle_dashboard_command(store: &Store, settings: &Settings) -> TrackerResult<()> {
    let summary = DashboardSummary::generate(store.state());
    print!("{}", format_dashboard(&summary, &DisplayOptions::from(settings)));
    Ok(())
}

/// Print the trend report for the current window
pub fn handle_report_command(
    store: &Store,
    settings: &Settings,
    args: ReportArgs,
) -> TrackerResult<()> {
    let report = TrendReport::generate(store.transactions(), args.period, args.kind, Utc::now());
    print!("{}", format_trend_report(&report, &DisplayOptions::from(settings)));
    Ok(())
}
