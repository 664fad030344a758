//! Collection-view pipeline for Larder.
//!
//! Given a snapshot of catalog records and a caller-owned [`ViewState`],
//! [`apply`] produces the exact page to display plus the counts the UI
//! needs:
//!
//! - category filter or case-insensitive name search, one active at a time
//! - stable single-key sort over dotted field paths, absent fields last
//! - fixed-size 1-based pagination, with an empty page past the end
//!
//! [`Catalog`] is the pre-filter collection value carrying the pure record
//! mutations (toggle-favor and delete). Every listing in the UI routes
//! through the same [`apply`] entry point, so filter, sort, and page
//! behavior cannot drift between screens.

mod collection;
mod error;
mod pipeline;
mod state;

pub use collection::Catalog;
pub use error::{ViewError, ViewResult};
pub use pipeline::{CollectionPage, apply};
pub use state::{DEFAULT_PAGE_SIZE, PageRequest, SortOrder, SortSpec, ViewFilter, ViewState};
