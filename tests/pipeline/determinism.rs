//! The ranked output does not depend on worker count or scheduling.

use abstractor::{rank, Query, Report, ReportFormat};

use crate::common::{abstract_names, make_store, run_pool, synthetic_corpus};

#[test]
fn test_ranking_identical_across_worker_counts() {
    let texts = synthetic_corpus(150);
    let borrowed: Vec<&str> = texts.iter().map(String::as_str).collect();
    let store = make_store(&borrowed);
    let docs = abstract_names(texts.len());

    let baseline = rank(&run_pool(1, "protein cell", docs.clone(), &store), 40);
    for threads in [2, 4, 7, 16] {
        let ranked = rank(&run_pool(threads, "protein cell", docs.clone(), &store), 40);
        assert_eq!(ranked, baseline, "ranking changed with {} workers", threads);
    }
}

#[test]
fn test_equal_scores_ordered_by_reference() {
    let store = make_store(&["same words.", "same words.", "same words."]);
    let docs = vec![
        "abstract_3.txt".to_string(),
        "abstract_1.txt".to_string(),
        "abstract_2.txt".to_string(),
    ];
    let ranked = rank(&run_pool(3, "same", docs, &store), 3);
    let order: Vec<&str> = ranked.iter().map(|r| r.reference.as_str()).collect();
    assert_eq!(order, ["abstract_1.txt", "abstract_2.txt", "abstract_3.txt"]);
}

#[test]
fn test_report_reproducible() {
    let texts = synthetic_corpus(60);
    let borrowed: Vec<&str> = texts.iter().map(String::as_str).collect();
    let store = make_store(&borrowed);
    let query = Query::parse("graph model energy");

    let render = |threads| {
        let results = run_pool(threads, "graph model energy", abstract_names(60), &store);
        Report::new(&query, &results, 10)
            .render(ReportFormat::Text)
            .unwrap()
    };
    assert_eq!(render(1), render(8));
}
