//! Categories group catalog records for filtering.

use crate::CategoryId;
use serde::{Deserialize, Serialize};

/// Display name of the sentinel pseudo-category.
pub const ALL_CATEGORIES: &str = "All Categories";

/// A named grouping of catalog records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Creates a category with a freshly minted id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }

    /// The sentinel pseudo-category that selects every record.
    ///
    /// Listed ahead of the real categories by the UI. Its empty id means
    /// "no category filter", so selecting it clears the filter.
    #[must_use]
    pub fn all_categories() -> Self {
        Self {
            id: CategoryId::empty(),
            name: ALL_CATEGORIES.to_string(),
        }
    }

    /// True for the sentinel pseudo-category.
    #[must_use]
    pub fn is_all_categories(&self) -> bool {
        self.id.is_empty()
    }
}
