//! Expense Tracker - local-first personal expense tracking
//!
//! This library provides the core of the expense tracker: a single-slot,
//! persisted store holding transactions, categories and budgets, and the
//! pure aggregation functions that turn that state into dashboards and
//! reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, money)
//! - `storage`: Persisted state slot, atomic JSON I/O and the seed dataset
//! - `store`: The state container and its mutation path
//! - `services`: Validated user intents
//! - `reports`: Aggregation (totals, breakdowns, trends, budget usage)
//! - `export`: JSON backup import/export, CSV and YAML exports
//! - `session`: Stand-in sign-in
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::reports::DashboardSummary;
//! use expense_tracker::storage::open_file_slot;
//! use expense_tracker::store::Store;
//!
//! let paths = TrackerPaths::new()?;
//! let store = Store::open(open_file_slot(&paths)?);
//! let summary = DashboardSummary::generate(store.state());
//! println!("Balance: {}", summary.totals.balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;
pub mod store;

pub use error::{TrackerError, TrackerResult};
