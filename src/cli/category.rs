//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::category::{format_category_details, format_category_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId, TransactionType};
use crate::services::{CategoryService, CategoryUpdate};
use crate::store::Store;

use super::KindArg;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only categories offered for this transaction type
        #[arg(long = "for", value_enum)]
        kind: Option<KindArg>,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Icon name
        #[arg(short, long)]
        icon: Option<String>,
        /// Display color (e.g., "#F97316")
        #[arg(long)]
        color: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
        /// New color
        #[arg(long, conflicts_with = "clear_color")]
        color: Option<String>,
        /// Remove the color
        #[arg(long)]
        clear_color: bool,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Resolve a category name or ID to the ID of an existing category
pub(crate) fn resolve_category_id(store: &mut Store, identifier: &str) -> TrackerResult<CategoryId> {
    CategoryService::new(store)
        .find(identifier)
        .map(|c| c.id.clone())
        .ok_or_else(|| TrackerError::category_not_found(identifier))
}

/// Handle a category command
pub fn handle_category_command(
    store: &mut Store,
    settings: &Settings,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    let mut service =
        CategoryService::new(store).with_default_icon(settings.default_category_icon.clone());

    match cmd {
        CategoryCommands::List { kind } => {
            let categories: Vec<Category> = match kind {
                Some(kind) => service
                    .categories_for(TransactionType::from(kind))
                    .into_iter()
                    .cloned()
                    .collect(),
                None => service.list().to_vec(),
            };
            println!("{}", format_category_table(&categories));
        }

        CategoryCommands::Add { name, icon, color } => {
            let category = service.create(&name, icon.as_deref(), color.as_deref())?;
            println!("Created category: {}", category.name);
            println!("  Icon: {}", category.icon);
            println!("  ID:   {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service
                .find(&category)
                .ok_or_else(|| TrackerError::category_not_found(&category))?;
            print!("{}", format_category_details(cat));
        }

        CategoryCommands::Edit {
            category,
            name,
            icon,
            color,
            clear_color,
        } => {
            let id = service
                .find(&category)
                .map(|c| c.id.clone())
                .ok_or_else(|| TrackerError::category_not_found(&category))?;

            if name.is_none() && icon.is_none() && color.is_none() && !clear_color {
                println!("No changes specified. Use --name, --icon, --color, or --clear-color.");
                return Ok(());
            }

            let color = if clear_color { Some(None) } else { color.map(Some) };
            let updated = service
                .update(&id, CategoryUpdate { name, icon, color })?
                .ok_or_else(|| TrackerError::category_not_found(id.to_string()))?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = service
                .find(&category)
                .cloned()
                .ok_or_else(|| TrackerError::category_not_found(&category))?;

            service.delete(&cat.id)?;
            println!("Deleted category: {}", cat.name);
            println!("Existing transactions and budgets keep their copy of it.");
        }
    }

    Ok(())
}
