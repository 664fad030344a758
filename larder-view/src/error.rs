//! Error types for the view crate.

use thiserror::Error;

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors raised when a caller violates the view-state contract.
///
/// The pipeline itself is total. Only constructing a page request can
/// fail, so contract violations surface at the call site instead of as a
/// nonsense page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Page sizes are at least 1. A zero size would make every page empty
    /// and the page count undefined.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// Page numbers are 1-based. Page 0 does not exist.
    #[error("page number must be at least 1")]
    ZeroPageNumber,
}
