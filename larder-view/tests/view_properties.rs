//! Property-based tests for the collection-view pipeline.
//!
//! These pin the pipeline contract for arbitrary catalogs:
//! - Filters admit exactly the records they should, never more
//! - Sorting is a stable permutation of the filtered set
//! - Page lengths follow from the matched count and the page request
//! - The collection mutations are pure and reversible where promised

use larder_model::{Category, CategoryId, Food, RecordId};
use larder_view::{Catalog, PageRequest, SortSpec, ViewFilter, ViewState, apply};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

const CATEGORY_POOL: [(&str, &str); 3] = [
    ("cat-fruit", "Fruit"),
    ("cat-vegetables", "Vegetables"),
    ("cat-dairy", "Dairy"),
];

fn pool_category(index: usize) -> Category {
    let (id, name) = CATEGORY_POOL[index];
    Category {
        id: CategoryId::from(id),
        name: name.to_string(),
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,12}").unwrap()
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Food>> {
    prop::collection::vec(
        (
            name_strategy(),
            0usize..CATEGORY_POOL.len(),
            0.0f64..100.0,
            0u32..50,
            any::<bool>(),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, pick, price, number_in_stock, is_favored))| Food {
                id: RecordId::from(format!("food-{index}")),
                name,
                category: pool_category(pick),
                price,
                number_in_stock,
                is_favored,
            })
            .collect()
    })
}

fn page_strategy() -> impl Strategy<Value = PageRequest> {
    (1usize..6, 1usize..8).prop_map(|(number, size)| PageRequest::new(number, size).unwrap())
}

// =============================================================================
// FILTER PROPERTY TESTS
// =============================================================================

mod filter_properties {
    use super::*;

    proptest! {
        /// Every record on a category-filtered page belongs to the category,
        /// and matched counts every such record in the snapshot.
        #[test]
        fn category_filter_is_exact(
            records in catalog_strategy(),
            pick in 0usize..3,
            page in page_strategy(),
        ) {
            let category = pool_category(pick);
            let state = ViewState::new(
                ViewFilter::Category(category.id.clone()),
                SortSpec::default(),
                page,
            );
            let result = apply(&records, &state);

            let expected = records.iter().filter(|f| f.category.id == category.id).count();
            prop_assert_eq!(result.matched, expected);
            prop_assert!(result.records.iter().all(|f| f.category.id == category.id));
        }

        /// With a page large enough for everything, a category filter
        /// returns exactly the matching records; nothing else drops out.
        #[test]
        fn category_filter_drops_nothing_before_pagination(
            records in catalog_strategy(),
            pick in 0usize..3,
        ) {
            let category = pool_category(pick);
            let size = records.len().max(1);
            let state = ViewState::new(
                ViewFilter::Category(category.id.clone()),
                SortSpec::default(),
                PageRequest::new(1, size).unwrap(),
            );
            let result = apply(&records, &state);

            let mut got: Vec<&str> = result.records.iter().map(|f| f.id.as_str()).collect();
            got.sort_unstable();
            let mut expected: Vec<&str> = records
                .iter()
                .filter(|f| f.category.id == category.id)
                .map(|f| f.id.as_str())
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(got, expected);
        }

        /// Search admits exactly the records whose name contains the term,
        /// case-insensitively.
        #[test]
        fn search_filter_is_exact(
            records in catalog_strategy(),
            term in "[a-zA-Z]{1,4}",
            page in page_strategy(),
        ) {
            let state = ViewState::new(
                ViewFilter::Search(term.clone()),
                SortSpec::default(),
                page,
            );
            let result = apply(&records, &state);

            let needle = term.to_lowercase();
            let expected = records
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&needle))
                .count();
            prop_assert_eq!(result.matched, expected);
            prop_assert!(
                result.records.iter().all(|f| f.name.to_lowercase().contains(&needle))
            );
        }
    }
}

// =============================================================================
// SORT AND PAGINATION PROPERTY TESTS
// =============================================================================

mod pipeline_properties {
    use super::*;

    proptest! {
        /// |page| == min(size, max(0, matched - (number - 1) * size)).
        #[test]
        fn page_length_is_exact(records in catalog_strategy(), page in page_strategy()) {
            let state = ViewState::new(ViewFilter::None, SortSpec::default(), page);
            let result = apply(&records, &state);

            let start = (page.number() - 1) * page.size();
            let expected = result.matched.saturating_sub(start).min(page.size());
            prop_assert_eq!(result.records.len(), expected);
        }

        /// The same snapshot and state always produce the same page.
        #[test]
        fn apply_is_deterministic(
            records in catalog_strategy(),
            descending in any::<bool>(),
            page in page_strategy(),
        ) {
            let sort = if descending {
                SortSpec::descending("price")
            } else {
                SortSpec::ascending("price")
            };
            let state = ViewState::new(ViewFilter::None, sort, page);
            prop_assert_eq!(apply(&records, &state), apply(&records, &state));
        }

        /// Sorting never drops or invents records: a page sized to the
        /// snapshot is a permutation of it, in either direction.
        #[test]
        fn sort_is_a_permutation(records in catalog_strategy(), descending in any::<bool>()) {
            let size = records.len().max(1);
            let sort = if descending {
                SortSpec::descending("name")
            } else {
                SortSpec::ascending("name")
            };
            let state = ViewState::new(ViewFilter::None, sort, PageRequest::new(1, size).unwrap());
            let result = apply(&records, &state);

            let mut got: Vec<&str> = result.records.iter().map(|f| f.id.as_str()).collect();
            got.sort_unstable();
            let mut expected: Vec<&str> = records.iter().map(|f| f.id.as_str()).collect();
            expected.sort_unstable();
            prop_assert_eq!(got, expected);
        }
    }
}

// =============================================================================
// COLLECTION MUTATION PROPERTY TESTS
// =============================================================================

mod mutation_properties {
    use super::*;

    proptest! {
        /// Toggling the favored flag twice restores the collection, whether
        /// or not the id exists.
        #[test]
        fn toggle_favored_is_an_involution(records in catalog_strategy(), index in 0usize..24) {
            let catalog = Catalog::from(records);
            let id = RecordId::from(format!("food-{index}"));
            let round_trip = catalog.toggle_favored(&id).toggle_favored(&id);
            prop_assert_eq!(round_trip, catalog);
        }

        /// Deleting an id not in the collection changes nothing.
        #[test]
        fn delete_of_a_missing_id_is_identity(records in catalog_strategy()) {
            let catalog = Catalog::from(records);
            let unchanged = catalog.without(&RecordId::from("missing-id"));
            prop_assert_eq!(unchanged, catalog);
        }

        /// Deleting a present id removes exactly that record and keeps the
        /// order of the rest.
        #[test]
        fn delete_removes_exactly_one_record(records in catalog_strategy(), index in 0usize..24) {
            let catalog = Catalog::from(records);
            let id = RecordId::from(format!("food-{index}"));
            let smaller = catalog.without(&id);

            if catalog.contains(&id) {
                prop_assert_eq!(smaller.len(), catalog.len() - 1);
                prop_assert!(!smaller.contains(&id));

                let expected: Vec<&Food> = catalog.iter().filter(|f| f.id != id).collect();
                let got: Vec<&Food> = smaller.iter().collect();
                prop_assert_eq!(got, expected);
            } else {
                prop_assert_eq!(smaller, catalog);
            }
        }
    }
}
