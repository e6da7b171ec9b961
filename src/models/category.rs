//! Category model
//!
//! Categories group transactions and budgets ("Food", "Housing"). The
//! category named "Income" is reserved by the system and cannot be deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Name of the system-reserved income category
pub const INCOME_CATEGORY_NAME: &str = "Income";

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, unique ignoring case
    pub name: String,

    /// Icon name shown next to the category
    pub icon: String,

    /// Optional display color (e.g. "#F97316")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    /// Create a category with an explicit id
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: None,
        }
    }

    /// Whether this is the reserved "Income" category
    pub fn is_reserved(&self) -> bool {
        self.name == INCOME_CATEGORY_NAME
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Input for creating a category; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: None,
        }
    }

    /// Attach the id the store generated
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            icon: self.icon,
            color: self.color,
        }
    }
}

/// Partial update for a category: `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    /// `Some(None)` clears the color
    pub color: Option<Option<String>>,
}

impl CategoryPatch {
    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon.is_none() && self.color.is_none()
    }

    /// Produce the merged category, leaving the original untouched
    pub fn apply_to(&self, category: &Category) -> Category {
        Category {
            id: category.id.clone(),
            name: self.name.clone().unwrap_or_else(|| category.name.clone()),
            icon: self.icon.clone().unwrap_or_else(|| category.icon.clone()),
            color: match &self.color {
                Some(color) => color.clone(),
                None => category.color.clone(),
            },
        }
    }
}
