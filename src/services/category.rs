//! Category service
//!
//! Provides business logic for category management: unique names, a default
//! icon for new categories, and the reserved "Income" category that cannot
//! be deleted.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Category, CategoryId, CategoryPatch, NewCategory, TransactionType, INCOME_CATEGORY_NAME,
};
use crate::store::{Outcome, Store};

/// Icon used when neither the caller nor the settings supply one
pub const DEFAULT_CATEGORY_ICON: &str = "tag";

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a mut Store,
    default_icon: String,
}

/// Fields to change on an existing category
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    /// `Some(None)` clears the color
    pub color: Option<Option<String>>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a mut Store) -> Self {
        Self {
            store,
            default_icon: DEFAULT_CATEGORY_ICON.to_string(),
        }
    }

    /// Use a different icon for categories created without one
    pub fn with_default_icon(mut self, icon: impl Into<String>) -> Self {
        self.default_icon = icon.into();
        self
    }

    /// Create a category
    pub fn create(
        &mut self,
        name: &str,
        icon: Option<&str>,
        color: Option<&str>,
    ) -> TrackerResult<Category> {
        let name = self.validate_name(name, None)?;

        let icon = icon
            .map(str::trim)
            .filter(|icon| !icon.is_empty())
            .unwrap_or(self.default_icon.as_str())
            .to_string();

        let id = self.store.add_category(NewCategory {
            name,
            icon,
            color: color.map(str::to_string),
        });

        self.store
            .find_category(&id)
            .cloned()
            .ok_or_else(|| TrackerError::category_not_found(id.to_string()))
    }

    /// Update a category. Returns `None` when no category has `id`.
    ///
    /// Transactions and budgets already carrying this category keep their
    /// old copy.
    pub fn update(
        &mut self,
        id: &CategoryId,
        update: CategoryUpdate,
    ) -> TrackerResult<Option<Category>> {
        let reserved = match self.store.find_category(id) {
            Some(category) => category.is_reserved(),
            None => return Ok(None),
        };

        // The reserved category is recognised by its exact name
        if reserved && update.name.is_some() {
            return Err(TrackerError::Protected(format!(
                "Cannot rename the {} category",
                INCOME_CATEGORY_NAME
            )));
        }

        let name = update
            .name
            .as_deref()
            .map(|name| self.validate_name(name, Some(id)))
            .transpose()?;

        self.store.update_category(
            id,
            CategoryPatch {
                name,
                icon: update.icon,
                color: update.color,
            },
        );

        Ok(self.store.find_category(id).cloned())
    }

    /// Delete a category. Returns false if there was nothing to delete.
    pub fn delete(&mut self, id: &CategoryId) -> TrackerResult<bool> {
        match self.store.delete_category(id) {
            Outcome::Applied => Ok(true),
            Outcome::NotFound => Ok(false),
            Outcome::Protected => Err(TrackerError::Protected(format!(
                "Cannot delete the {} category",
                INCOME_CATEGORY_NAME
            ))),
        }
    }

    /// Find a category by id, falling back to a case-insensitive name match
    pub fn find(&self, identifier: &str) -> Option<&Category> {
        let identifier = identifier.trim();
        self.store
            .find_category(&CategoryId::from(identifier))
            .or_else(|| self.store.find_category_by_name(identifier))
    }

    /// All categories in stored order
    pub fn list(&self) -> &[Category] {
        self.store.categories()
    }

    /// Categories offered for a transaction of the given type
    pub fn categories_for(&self, kind: TransactionType) -> Vec<&Category> {
        self.store
            .categories()
            .iter()
            .filter(|c| match kind {
                TransactionType::Income => c.is_reserved(),
                TransactionType::Expense => !c.is_reserved(),
            })
            .collect()
    }

    fn validate_name(&self, name: &str, current: Option<&CategoryId>) -> TrackerResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "Please enter a category name".into(),
            ));
        }

        let taken = self
            .store
            .categories()
            .iter()
            .any(|c| c.has_name(name) && Some(&c.id) != current);
        if taken {
            return Err(TrackerError::Duplicate {
                entity_type: "category",
                identifier: name.to_string(),
            });
        }

        Ok(name.to_string())
    }
}
