//! Catalog record model for Larder.
//!
//! Defines the data the collection-view pipeline operates on:
//! - [`Food`] and [`Category`]: the concrete catalog records and their
//!   groupings
//! - [`RecordId`] and [`CategoryId`]: opaque string identifiers
//! - [`FieldPath`] and [`FieldValue`]: dotted-path field access for
//!   sorting and generic cell rendering
//! - [`CatalogRecord`] and [`Favorable`]: the traits the view pipeline
//!   is generic over
//!
//! The model performs no I/O. Record lists are snapshots supplied by an
//! external data source and are never mutated in place.

mod category;
mod field;
mod food;
mod ids;
mod record;

pub use category::{ALL_CATEGORIES, Category};
pub use field::{FieldPath, FieldValue};
pub use food::Food;
pub use ids::{CategoryId, RecordId};
pub use record::{CatalogRecord, Favorable};
