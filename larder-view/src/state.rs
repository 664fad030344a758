//! View state: which filter is active, how the list is sorted, and which
//! page is shown.
//!
//! A [`ViewState`] is owned by the caller and carried across interactions;
//! the pipeline only ever reads it. The filter is a tagged variant, so a
//! category selection and a search term can never be active at the same
//! time: setting one replaces the other, and every filter change returns
//! the view to the first page.

use crate::error::{ViewError, ViewResult};
use larder_model::{Category, CategoryId, FieldPath};
use serde::{Deserialize, Serialize};

/// Records per page unless the caller chooses otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// The active record filter. At most one applies at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ViewFilter {
    /// Every record passes.
    #[default]
    None,
    /// Keep records belonging to this category. The empty id behaves like
    /// [`ViewFilter::None`], matching the "All Categories" sentinel.
    Category(CategoryId),
    /// Keep records whose name contains this term, case-insensitively.
    /// The raw term is preserved so the UI can echo it back; terms that
    /// are empty or whitespace-only keep everything.
    Search(String),
}

impl ViewFilter {
    /// True when no record can be excluded by this filter.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        match self {
            ViewFilter::None => true,
            ViewFilter::Category(id) => id.is_empty(),
            ViewFilter::Search(term) => term.trim().is_empty(),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending, the direction a freshly selected sort column starts with.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The single active sort key and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Dotted path of the field to sort by.
    pub path: FieldPath,
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates an ascending sort on `path`.
    #[must_use]
    pub fn ascending(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            order: SortOrder::Asc,
        }
    }

    /// Creates a descending sort on `path`.
    #[must_use]
    pub fn descending(path: impl Into<FieldPath>) -> Self {
        Self {
            path: path.into(),
            order: SortOrder::Desc,
        }
    }

    /// The column-header click rule: clicking the active column flips the
    /// direction, clicking a new column sorts it ascending.
    #[must_use]
    pub fn toggled(&self, path: impl Into<FieldPath>) -> Self {
        let path = path.into();
        if self.path == path {
            Self {
                path,
                order: self.order.flipped(),
            }
        } else {
            Self::ascending(path)
        }
    }
}

impl Default for SortSpec {
    /// Name ascending, the catalog's initial presentation.
    fn default() -> Self {
        Self::ascending("name")
    }
}

/// A validated 1-based page request.
///
/// Construction is the fail-fast point for caller-contract violations: a
/// zero page number or page size is rejected here, so the pipeline never
/// has to divide by zero or underflow an offset. Deserialization funnels
/// through the same validation via [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    number: usize,
    size: usize,
}

impl PageRequest {
    /// Creates a page request. Rejects a zero page number or size.
    pub fn new(number: usize, size: usize) -> ViewResult<Self> {
        if size == 0 {
            return Err(ViewError::ZeroPageSize);
        }
        if number == 0 {
            return Err(ViewError::ZeroPageNumber);
        }
        Ok(Self { number, size })
    }

    /// The first page at the given size.
    pub fn first(size: usize) -> ViewResult<Self> {
        Self::new(1, size)
    }

    /// The 1-based page number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Records per page, at least 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the first record on this page. Saturates instead of
    /// overflowing; a saturated offset is past every record and selects
    /// an empty page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }

    /// The same size at a different page number.
    pub fn with_number(&self, number: usize) -> ViewResult<Self> {
        Self::new(number, self.size)
    }

    /// Page 1 at this page size.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            number: 1,
            size: self.size,
        }
    }
}

impl Default for PageRequest {
    /// Page 1 at [`DEFAULT_PAGE_SIZE`].
    fn default() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Unvalidated mirror of [`PageRequest`] that incoming data is decoded
/// into before conversion through [`PageRequest::new`].
#[derive(Deserialize)]
struct RawPageRequest {
    number: usize,
    size: usize,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = ViewError;

    fn try_from(raw: RawPageRequest) -> ViewResult<Self> {
        Self::new(raw.number, raw.size)
    }
}

/// The complete set of user-chosen display parameters at a point in time.
///
/// Transitions consume the state and return the next one, mirroring how
/// each user interaction replaces the previous view wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewState {
    filter: ViewFilter,
    sort: SortSpec,
    page: PageRequest,
}

impl ViewState {
    /// Creates a view state from parts.
    #[must_use]
    pub fn new(filter: ViewFilter, sort: SortSpec, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    /// The active sort key and direction.
    #[must_use]
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// The requested page.
    #[must_use]
    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Selects a category. Any search term is dropped with the rest of the
    /// previous filter, and the view returns to the first page. Selecting
    /// the "All Categories" sentinel clears the filter instead.
    #[must_use]
    pub fn select_category(self, category: &Category) -> Self {
        let filter = if category.is_all_categories() {
            ViewFilter::None
        } else {
            ViewFilter::Category(category.id.clone())
        };
        Self {
            filter,
            page: self.page.reset(),
            ..self
        }
    }

    /// Replaces the filter with a search term. Any category selection is
    /// dropped and the view returns to the first page. The term is kept
    /// verbatim; whitespace-only terms filter nothing.
    #[must_use]
    pub fn search(self, term: impl Into<String>) -> Self {
        Self {
            filter: ViewFilter::Search(term.into()),
            page: self.page.reset(),
            ..self
        }
    }

    /// Applies the column-header click rule to the sort key. The page is
    /// kept: reordering does not change which page the user is on.
    #[must_use]
    pub fn toggle_sort(self, path: impl Into<FieldPath>) -> Self {
        let sort = self.sort.toggled(path);
        Self { sort, ..self }
    }

    /// Navigates to a 1-based page. Rejects page 0.
    pub fn select_page(self, number: usize) -> ViewResult<Self> {
        let page = self.page.with_number(number)?;
        Ok(Self { page, ..self })
    }
}
