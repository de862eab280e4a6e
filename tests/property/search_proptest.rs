//! Property-based tests for result ordering

use factual::shared::{sort_by_match, MatchValue, SearchResult};
use proptest::prelude::*;

fn result(match_value: Option<MatchValue>) -> SearchResult {
    SearchResult {
        match_value,
        source_url: None,
    }
}

fn arb_match() -> impl Strategy<Value = Option<MatchValue>> {
    prop_oneof![
        (0.0f64..100.0).prop_map(|p| Some(MatchValue::Text(format!("{:.2}%", p)))),
        (0.0f64..100.0).prop_map(|p| Some(MatchValue::Number(p))),
        Just(Some(MatchValue::Text("n/a".to_string()))),
        Just(None),
    ]
}

proptest! {
    #[test]
    fn prop_sorted_results_are_non_increasing(values in prop::collection::vec(arb_match(), 0..20)) {
        let mut results: Vec<_> = values.into_iter().map(result).collect();
        let len = results.len();
        sort_by_match(&mut results);
        prop_assert_eq!(results.len(), len);

        let percents: Vec<_> = results.iter().map(SearchResult::percent).collect();
        for pair in percents.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "unparseable match sorted before a number"),
                _ => {}
            }
        }
    }

    #[test]
    fn prop_percent_text_roundtrip(p in 0.0f64..100.0) {
        let value = MatchValue::Text(format!("{}%", p));
        prop_assert_eq!(value.percent(), Some(p));
    }
}
