//! Property-based tests for record list filtering

use proptest::prelude::*;

use proctorlab_core::search;
use proctorlab_core::store::{ProctorStore, SampleProctorStore};

/// Strategy for arbitrary short queries, including ones that match nothing
fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 -]{1,12}",
        Just("highway".to_string()),
        Just("H101".to_string()),
    ]
}

proptest! {
    /// Filtering never invents records: every hit comes from the input,
    /// in input order.
    #[test]
    fn filtered_is_an_ordered_subset(query in arb_query()) {
        let store = SampleProctorStore::new();
        let hits = search::filter(store.list(), &query);
        prop_assert!(hits.len() <= store.list().len());

        let mut cursor = store.list().iter();
        for hit in hits {
            prop_assert!(cursor.any(|record| record == hit));
        }
    }

    /// Queries are case-insensitive.
    #[test]
    fn query_case_does_not_matter(query in arb_query()) {
        let store = SampleProctorStore::new();
        let lower = search::filter(store.list(), &query.to_lowercase());
        let upper = search::filter(store.list(), &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Every hit actually matches the query.
    #[test]
    fn hits_match_the_query(query in arb_query()) {
        let store = SampleProctorStore::new();
        for hit in search::filter(store.list(), &query) {
            prop_assert!(search::matches_query(hit, &query));
        }
    }
}
