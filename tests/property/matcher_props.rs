//! Matcher properties: threshold, correctness against the oracle, cap, order.

use crate::oracles::{index_strategy, oracle_filter, query_strategy};
use proptest::prelude::*;
use sitesearch::{char_len, filter_documents, Matcher, MAX_RESULTS};

proptest! {
    #[test]
    fn prop_threshold(index in index_strategy(), query in "(.)?") {
        prop_assert!(Matcher::default().positions(&query, &index).is_empty());
    }

    #[test]
    fn prop_substring_correctness(index in index_strategy(), query in query_strategy()) {
        prop_assume!(char_len(&query) >= 2);
        let expected = oracle_filter(&query, index.as_slice());
        let found: Vec<&str> = filter_documents(&query, &index)
            .iter()
            .map(|doc| doc.href.as_str())
            .collect();
        let wanted: Vec<&str> = expected
            .iter()
            .map(|&position| index.as_slice()[position].href.as_str())
            .collect();
        prop_assert_eq!(found, wanted);
    }

    #[test]
    fn prop_widget_matches_are_oracle_prefix(index in index_strategy(), query in query_strategy()) {
        prop_assume!(char_len(&query) >= 2);
        let expected = oracle_filter(&query, index.as_slice());
        let positions = Matcher::default().positions(&query, &index);
        prop_assert_eq!(&positions[..], &expected[..expected.len().min(MAX_RESULTS)]);
    }

    #[test]
    fn prop_cap(index in index_strategy(), query in query_strategy()) {
        prop_assert!(Matcher::default().positions(&query, &index).len() <= MAX_RESULTS);
    }

    #[test]
    fn prop_order_preserved(index in index_strategy(), query in query_strategy()) {
        let positions = Matcher::default().positions(&query, &index);
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
