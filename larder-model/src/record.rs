//! The contract between catalog data and the collection-view pipeline.

use crate::{CategoryId, FieldPath, FieldValue, RecordId};

/// A record the collection-view pipeline can filter, search, and sort.
///
/// A record exposes its identity, its category reference, the name the
/// search stage matches against, and dotted-path field access for the
/// sort stage. Implementations resolve paths with an explicit match over
/// the path segments; unknown paths return [`FieldValue::Absent`], which
/// sorts last in either direction.
pub trait CatalogRecord {
    /// The record's stable unique identifier.
    fn id(&self) -> &RecordId;

    /// The id of the category this record belongs to.
    fn category_id(&self) -> &CategoryId;

    /// The display name. The search stage matches against it
    /// case-insensitively.
    fn name(&self) -> &str;

    /// Resolves a dotted field path to a typed value.
    fn field(&self, path: &FieldPath) -> FieldValue<'_>;
}

/// A record carrying a user-toggleable favored flag.
///
/// Only the toggle-favor collection operation requires this. Records
/// without the flag still flow through the view pipeline.
pub trait Favorable {
    /// Current state of the favored flag.
    fn is_favored(&self) -> bool;

    /// Sets the favored flag.
    fn set_favored(&mut self, favored: bool);
}
