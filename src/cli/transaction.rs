//! Transaction CLI commands
//!
//! Add, edit, delete and list transactions. Categories can be given by id or
//! by name.

use chrono::Utc;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_table, DisplayOptions};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, TransactionId, TransactionType};
use crate::reports::{RegisterFilter, TypeFilter};
use crate::services::{TransactionInput, TransactionService, TransactionUpdate};
use crate::store::Store;

use super::category::resolve_category_id;
use super::{parse_amount, parse_date, KindArg};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g., "42" or "42.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction type
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: KindArg,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New type
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },

    /// List transactions, newest first
    List {
        /// Search descriptions and amounts
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// Only this type
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: TypeFilter,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut Store,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let opts = DisplayOptions::from(settings);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            kind,
            date,
        } => {
            let category_id = resolve_category_id(store, &category)?;
            let kind = TransactionType::from(kind);
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => Utc::now(),
            };

            let txn = TransactionService::new(store).create(TransactionInput {
                amount: parse_amount(&amount)?,
                description,
                category_id,
                date,
                kind,
            })?;

            println!("Recorded {}: {}", kind.as_str(), txn.description);
            println!("  Amount:   {}", opts.money(txn.amount));
            println!("  Category: {}", txn.category.name);
            println!("  ID:       {}", txn.id);
        }

        TransactionCommands::Show { id } => {
            let id = TransactionId::from(id);
            let txn = store
                .find_transaction(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(txn, &opts));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            kind,
            date,
        } => {
            let id = TransactionId::from(id);
            let update = TransactionUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category_id: category
                    .as_deref()
                    .map(|c| resolve_category_id(store, c))
                    .transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                kind: kind.map(TransactionType::from),
            };

            match TransactionService::new(store).update(&id, update)? {
                Some(txn) => {
                    println!("Updated transaction: {}", txn.description);
                    print!("{}", format_transaction_details(&txn, &opts));
                }
                None => println!("No transaction with ID {}; nothing changed", id),
            }
        }

        TransactionCommands::Delete { id } => {
            let id = TransactionId::from(id);
            if TransactionService::new(store).delete(&id) {
                println!("Deleted transaction {}", id);
            } else {
                println!("No transaction with ID {}; nothing deleted", id);
            }
        }

        TransactionCommands::List {
            search,
            category,
            kind,
            limit,
        } => {
            // Old transactions may carry a category that no longer exists, so
            // an unknown name is used as a raw id.
            let category_id = category.map(|c| {
                resolve_category_id(store, &c).unwrap_or_else(|_| CategoryId::from(c))
            });

            let filter = RegisterFilter {
                search: search.filter(|s| !s.trim().is_empty()),
                category_id,
                kind,
            };
            let mut entries = filter.apply(store.transactions());
            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            println!("{}", format_transaction_table(&entries, &opts));
        }
    }

    Ok(())
}
