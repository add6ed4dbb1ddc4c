//! Ranking invariants over arbitrary frozen results.

use abstractor::testing::frozen;
use abstractor::{jaccard, rank, tokenize};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::btree_map("[a-h]{1,4}\\.txt", 0u32..=20, 0..40).prop_map(|map| {
        map.into_iter()
            .map(|(reference, steps)| (reference, steps as f64 / 20.0))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_rank_length_is_clamped(rows in rows_strategy(), limit in 0usize..60) {
        let borrowed: Vec<(&str, f64, &str)> =
            rows.iter().map(|(r, s)| (r.as_str(), *s, "")).collect();
        let ranked = rank(&frozen(&borrowed), limit);
        prop_assert_eq!(ranked.len(), limit.min(rows.len()));
    }

    #[test]
    fn prop_rank_is_ordered(rows in rows_strategy()) {
        let borrowed: Vec<(&str, f64, &str)> =
            rows.iter().map(|(r, s)| (r.as_str(), *s, "")).collect();
        let ranked = rank(&frozen(&borrowed), rows.len());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].reference < pair[1].reference);
            }
        }
        for (i, doc) in ranked.iter().enumerate() {
            prop_assert_eq!(doc.rank, i + 1);
        }
    }

    #[test]
    fn prop_top_n_is_prefix_of_full_ranking(rows in rows_strategy(), limit in 0usize..40) {
        let borrowed: Vec<(&str, f64, &str)> =
            rows.iter().map(|(r, s)| (r.as_str(), *s, "")).collect();
        let results = frozen(&borrowed);
        let full = rank(&results, rows.len());
        let top = rank(&results, limit);
        prop_assert_eq!(&full[..top.len()], &top[..]);
    }

    #[test]
    fn prop_jaccard_symmetric(a in "[a-d ]{0,30}", b in "[a-d ]{0,30}") {
        let (a, b) = (tokenize(&a), tokenize(&b));
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }
}
