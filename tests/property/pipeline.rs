//! The pool produces the same records whatever the worker count.

use abstractor::rank;
use proptest::prelude::*;

use crate::common::{abstract_names, make_store, run_pool};

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    let sentence = prop::collection::vec("[a-f]{1,2}", 1..6).prop_map(|w| w.join(" ") + ".");
    let document = prop::collection::vec(sentence, 0..4).prop_map(|s| s.join(" "));
    prop::collection::vec(document, 0..25)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_results_independent_of_workers(
        corpus in corpus_strategy(),
        query in "[a-f]{1,2}( [a-f]{1,2}){0,3}",
        threads in 2usize..9,
    ) {
        let borrowed: Vec<&str> = corpus.iter().map(String::as_str).collect();
        let store = make_store(&borrowed);
        let docs = abstract_names(corpus.len());

        let single = run_pool(1, &query, docs.clone(), &store);
        let many = run_pool(threads, &query, docs, &store);

        prop_assert_eq!(single.len(), corpus.len());
        prop_assert_eq!(many.len(), corpus.len());
        prop_assert_eq!(rank(&single, corpus.len()), rank(&many, corpus.len()));
    }
}
