//! The collection-view pipeline: filter, sort, paginate.
//!
//! [`apply`] is the single entry point every catalog page routes through.
//! It never mutates its inputs and performs no I/O; the same snapshot and
//! view state always produce the same page.

use crate::state::{PageRequest, SortOrder, SortSpec, ViewFilter, ViewState};
use larder_model::{CatalogRecord, FieldValue};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// One page of a filtered, sorted collection, plus the counts the UI needs
/// for its "Showing N items" line and page links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionPage<R> {
    /// The records on the requested page, in display order.
    pub records: Vec<R>,
    /// Records matching the active filter, counted before pagination.
    pub matched: usize,
    /// Size of the unfiltered snapshot. Zero means an empty catalog, which
    /// the UI presents differently from a filter that matched nothing.
    pub catalog_len: usize,
    /// The page request that produced this page.
    pub request: PageRequest,
}

impl<R> CollectionPage<R> {
    /// True when the snapshot itself is empty, as opposed to a filter
    /// matching nothing.
    #[must_use]
    pub fn is_catalog_empty(&self) -> bool {
        self.catalog_len == 0
    }

    /// Total pages the matched set spans at this page size.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.matched.div_ceil(self.request.size())
    }
}

/// Applies a view state to a record snapshot.
///
/// The stages run in a fixed order: the category or search filter, a
/// stable sort on the selected field, then the page slice. `matched`
/// counts the records surviving the filter stage, before pagination, so
/// the count stays constant while the user pages through results. A page
/// number beyond the matched range yields an empty page.
#[must_use]
pub fn apply<R>(records: &[R], view: &ViewState) -> CollectionPage<R>
where
    R: CatalogRecord + Clone,
{
    let mut filtered = filter_stage(records, view.filter());
    let matched = filtered.len();

    sort_stage(&mut filtered, view.sort());

    let page = view.page();
    let selected: Vec<R> = filtered
        .into_iter()
        .skip(page.offset())
        .take(page.size())
        .cloned()
        .collect();

    debug!(
        matched,
        catalog_len = records.len(),
        page = page.number(),
        returned = selected.len(),
        "Collection view applied"
    );

    CollectionPage {
        records: selected,
        matched,
        catalog_len: records.len(),
        request: page,
    }
}

/// Keeps the records passing the active filter, preserving snapshot order.
fn filter_stage<'a, R: CatalogRecord>(records: &'a [R], filter: &ViewFilter) -> Vec<&'a R> {
    if filter.is_trivial() {
        return records.iter().collect();
    }
    match filter {
        ViewFilter::Category(id) => records
            .iter()
            .filter(|record| record.category_id() == id)
            .collect(),
        ViewFilter::Search(term) => {
            let needle = term.to_lowercase();
            records
                .iter()
                .filter(|record| record.name().to_lowercase().contains(&needle))
                .collect()
        }
        ViewFilter::None => records.iter().collect(),
    }
}

/// Stable sort on the field addressed by the sort key.
///
/// Each key is extracted once per record. Records whose key is absent sort
/// last regardless of direction; present keys compare with the direction
/// applied.
fn sort_stage<'a, R: CatalogRecord>(records: &mut Vec<&'a R>, sort: &SortSpec) {
    let mut keyed: Vec<(FieldValue<'a>, &'a R)> = records
        .drain(..)
        .map(|record| (record.field(&sort.path), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, sort.order));
    records.extend(keyed.into_iter().map(|(_, record)| record));
}

fn compare_keys(a: &FieldValue<'_>, b: &FieldValue<'_>, order: SortOrder) -> Ordering {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => Ordering::Equal,
        // Absent keys sort last in both directions.
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match order {
            SortOrder::Asc => a.compare(b),
            SortOrder::Desc => a.compare(b).reverse(),
        },
    }
}
