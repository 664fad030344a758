//! The pre-filter record collection and its pure mutations.
//!
//! A [`Catalog`] is a snapshot value. The favor toggle and the delete both
//! return a new collection and leave the original untouched, so callers
//! can hold onto earlier snapshots and re-apply a view to any of them.

use crate::pipeline::{self, CollectionPage};
use crate::state::ViewState;
use larder_model::{CatalogRecord, Favorable, RecordId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An ordered snapshot of catalog records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog<R> {
    records: Vec<R>,
}

impl<R> Catalog<R> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }
}

impl<R: CatalogRecord> Catalog<R> {
    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// True when a record with this id is present.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }
}

impl<R: CatalogRecord + Clone> Catalog<R> {
    /// Returns the snapshot without the record matching `id`.
    ///
    /// A missing id is a silent no-op. The relative order of the remaining
    /// records is preserved.
    #[must_use]
    pub fn without(&self, id: &RecordId) -> Self {
        if !self.contains(id) {
            debug!("Delete skipped, no record with id {id}");
            return self.clone();
        }
        let records = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        debug!("Removed record {id} from catalog");
        Self { records }
    }

    /// Applies a view state to this snapshot.
    #[must_use]
    pub fn view(&self, view: &ViewState) -> CollectionPage<R> {
        pipeline::apply(&self.records, view)
    }
}

impl<R: CatalogRecord + Favorable + Clone> Catalog<R> {
    /// Returns the snapshot with the favored flag flipped on the record
    /// matching `id`.
    ///
    /// A missing id is a silent no-op. Toggling the same id twice restores
    /// the original collection.
    #[must_use]
    pub fn toggle_favored(&self, id: &RecordId) -> Self {
        if !self.contains(id) {
            debug!("Favor toggle skipped, no record with id {id}");
            return self.clone();
        }
        let records = self
            .records
            .iter()
            .map(|record| {
                if record.id() == id {
                    let mut flipped = record.clone();
                    flipped.set_favored(!record.is_favored());
                    flipped
                } else {
                    record.clone()
                }
            })
            .collect();
        debug!("Toggled favored flag on record {id}");
        Self { records }
    }
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<Vec<R>> for Catalog<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R> FromIterator<R> for Catalog<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
