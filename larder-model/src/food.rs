//! The food record, the catalog's concrete record type.

use crate::{CatalogRecord, Category, CategoryId, Favorable, FieldPath, FieldValue, RecordId};
use serde::{Deserialize, Serialize};

/// A food item in the catalog.
///
/// The reference [`CatalogRecord`] implementation: every value the UI
/// sorts or renders is reachable by dotted path through [`Food::field`],
/// including the nested `category.name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: RecordId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub number_in_stock: u32,
    /// User-toggled marker. Missing in serialized form means not favored.
    #[serde(default)]
    pub is_favored: bool,
}

impl Food {
    /// Creates a food with a freshly minted id, not favored.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: f64,
        number_in_stock: u32,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            category,
            price,
            number_in_stock,
            is_favored: false,
        }
    }
}

impl CatalogRecord for Food {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn category_id(&self) -> &CategoryId {
        &self.category.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, path: &FieldPath) -> FieldValue<'_> {
        let segments: Vec<&str> = path.segments().collect();
        match segments.as_slice() {
            ["name"] => FieldValue::Text(&self.name),
            ["price"] => FieldValue::Number(self.price),
            ["number_in_stock"] => FieldValue::Number(f64::from(self.number_in_stock)),
            ["is_favored"] => FieldValue::Bool(self.is_favored),
            ["category", "id"] => FieldValue::Text(self.category.id.as_str()),
            ["category", "name"] => FieldValue::Text(&self.category.name),
            _ => FieldValue::Absent,
        }
    }
}

impl Favorable for Food {
    fn is_favored(&self) -> bool {
        self.is_favored
    }

    fn set_favored(&mut self, favored: bool) {
        self.is_favored = favored;
    }
}
