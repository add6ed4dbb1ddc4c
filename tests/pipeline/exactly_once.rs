//! Every queued document is scored and summarized exactly once.

use std::collections::HashSet;

use crate::common::{abstract_names, make_store, run_pool, synthetic_corpus};

fn corpus_refs(count: usize) -> (Vec<String>, abstractor::MemoryStore) {
    let texts = synthetic_corpus(count);
    let borrowed: Vec<&str> = texts.iter().map(String::as_str).collect();
    (abstract_names(count), make_store(&borrowed))
}

#[test]
fn test_every_document_scored_once() {
    let (docs, store) = corpus_refs(300);
    for threads in [1, 2, 3, 8, 32] {
        let results = run_pool(threads, "protein folding", docs.clone(), &store);

        assert_eq!(results.len(), docs.len(), "threads={}", threads);
        let scored: HashSet<&str> = results.scores().iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(scored.len(), docs.len(), "duplicate score with threads={}", threads);
        assert_eq!(
            scored,
            docs.iter().map(String::as_str).collect::<HashSet<_>>(),
            "scored set differs from input with threads={}",
            threads
        );
    }
}

#[test]
fn test_every_score_has_a_summary() {
    let (docs, store) = corpus_refs(120);
    let results = run_pool(6, "energy model", docs, &store);

    assert_eq!(results.summary_count(), results.len());
    for (record, summary) in results.iter() {
        assert!(results.summary(&record.reference).is_some());
        if record.score == 0.0 {
            assert!(summary.is_empty(), "{} scored 0 but has a summary", record.reference);
        }
    }
}

#[test]
fn test_scores_bounded() {
    let (docs, store) = corpus_refs(200);
    let results = run_pool(4, "cell data graph", docs, &store);
    for record in results.scores() {
        assert!(
            (0.0..=1.0).contains(&record.score),
            "{} has score {}",
            record.reference,
            record.score
        );
    }
}

#[test]
fn test_duplicate_references_scored_once() {
    let store = make_store(&["protein."]);
    let docs = vec!["abstract_1.txt".to_string(), "abstract_1.txt".to_string()];
    let results = run_pool(2, "protein.", docs, &store);
    assert_eq!(results.len(), 1);
    assert_eq!(results.summary_count(), 1);
}
