//! Budget CLI commands
//!
//! Spending limits per category. The spent figure is recorded by hand with
//! `set-spent`; it is never derived from transactions.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_table, DisplayOptions};
use crate::error::TrackerResult;
use crate::models::{BudgetId, BudgetPeriod};
use crate::reports::BudgetUsage;
use crate::services::{BudgetService, BudgetUpdate};
use crate::store::Store;

use super::category::resolve_category_id;
use super::{parse_amount, PeriodArg};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets with their usage
    List,

    /// Set a spending limit for a category
    Add {
        /// Category name or ID
        category: String,
        /// Limit amount (e.g., "300" or "300.00")
        amount: String,
        /// How often the limit resets
        #[arg(short, long, value_enum, default_value = "monthly")]
        period: PeriodArg,
    },

    /// Edit a budget
    Edit {
        /// Budget ID
        id: String,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New limit amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New period
        #[arg(short, long, value_enum)]
        period: Option<PeriodArg>,
    },

    /// Record how much has been spent against a budget
    #[command(name = "set-spent")]
    SetSpent {
        /// Budget ID
        id: String,
        /// Amount spent so far
        amount: String,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &mut Store,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let opts = DisplayOptions::from(settings);

    match cmd {
        BudgetCommands::List => {
            println!("{}", format_budget_table(store.budgets(), &opts));
        }

        BudgetCommands::Add {
            category,
            amount,
            period,
        } => {
            let category_id = resolve_category_id(store, &category)?;
            let amount = parse_amount(&amount)?;
            let budget = BudgetService::new(store).create(
                &category_id,
                amount,
                BudgetPeriod::from(period),
            )?;

            println!(
                "Created {} budget for {}: {}",
                budget.period.as_str(),
                budget.category.name,
                opts.money(budget.amount)
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Edit {
            id,
            category,
            amount,
            period,
        } => {
            if category.is_none() && amount.is_none() && period.is_none() {
                println!("No changes specified. Use --category, --amount, or --period.");
                return Ok(());
            }

            let id = BudgetId::from(id);
            let update = BudgetUpdate {
                category_id: category
                    .as_deref()
                    .map(|c| resolve_category_id(store, c))
                    .transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                period: period.map(BudgetPeriod::from),
            };

            let Some(budget) = BudgetService::new(store).update(&id, update)? else {
                println!("No budget with ID {}; nothing changed", id);
                return Ok(());
            };
            println!(
                "Updated budget for {}: {} {}",
                budget.category.name,
                opts.money(budget.amount),
                budget.period.as_str()
            );
        }

        BudgetCommands::SetSpent { id, amount } => {
            let id = BudgetId::from(id);
            let spent = parse_amount(&amount)?;
            let Some(budget) = BudgetService::new(store).set_spent(&id, spent)? else {
                println!("No budget with ID {}; nothing changed", id);
                return Ok(());
            };

            let usage = BudgetUsage::for_budget(&budget);
            println!(
                "{}: {} of {} ({})",
                budget.category.name,
                opts.money(budget.spent),
                opts.money(budget.amount),
                usage.status_text(&opts.currency_symbol)
            );
        }

        BudgetCommands::Delete { id } => {
            let id = BudgetId::from(id);
            if BudgetService::new(store).delete(&id) {
                println!("Deleted budget {}", id);
            } else {
                println!("No budget with ID {}; nothing deleted", id);
            }
        }
    }

    Ok(())
}
