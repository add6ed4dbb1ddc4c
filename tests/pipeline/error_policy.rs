//! Missing or unreadable abstracts under the skip and abort policies.

use abstractor::{
    FsStore, MissingDocumentPolicy, NoProgress, Pipeline, PipelineConfig, PipelineError, Query,
    Report, ReportFormat,
};

use crate::common::{abstracts_dir, make_store, run_pool, workers};

#[test]
fn test_skip_policy_keeps_collections_consistent() {
    let store = make_store(&["alpha beta.", "beta gamma."]);
    let docs = vec![
        "abstract_1.txt".to_string(),
        "missing_a.txt".to_string(),
        "abstract_2.txt".to_string(),
        "missing_b.txt".to_string(),
    ];

    let results = run_pool(3, "beta", docs, &store);

    assert_eq!(results.len(), 2);
    assert_eq!(results.summary_count(), 2);
    assert_eq!(results.skipped(), ["missing_a.txt", "missing_b.txt"]);
    for skipped in results.skipped() {
        assert!(results.summary(skipped).is_none());
        assert!(results.scores().iter().all(|r| &r.reference != skipped));
    }
}

#[test]
fn test_limit_above_scored_count_is_clamped() {
    // N=2 requested, only one document loads
    let store = make_store(&["alpha."]);
    let docs = vec!["abstract_1.txt".to_string(), "gone.txt".to_string()];
    let results = run_pool(2, "alpha.", docs, &store);

    let report = Report::new(&Query::parse("alpha."), &results, 2);
    assert_eq!(report.results.len(), 1);

    let text = report.render(ReportFormat::Text).unwrap();
    assert_eq!(text.matches("Result ").count(), 1);
    assert!(text.ends_with("###\n"));
}

#[test]
fn test_abort_policy_reports_first_failure() {
    let dir = abstracts_dir(&["present."]);
    let store = FsStore::new(dir.path());
    let config = PipelineConfig::new(workers(2)).with_policy(MissingDocumentPolicy::Abort);

    let err = Pipeline::new(config)
        .run(
            &Query::parse("present."),
            vec!["abstract_1.txt".to_string(), "nope.txt".to_string()],
            &store,
            &NoProgress,
        )
        .unwrap_err();

    match err {
        PipelineError::DocumentUnavailable(source) => {
            assert_eq!(source.reference(), "nope.txt");
            assert!(source.to_string().contains("not found"));
        }
        other => panic!("Expected DocumentUnavailable, got {other:?}"),
    }
}

#[test]
fn test_abort_policy_stops_claiming() {
    // One worker, failure first: nothing after it is claimed
    let store = make_store(&["a.", "b.", "c."]);
    let progress = abstractor::ReportProgress::new();
    let config = PipelineConfig::new(workers(1)).with_policy(MissingDocumentPolicy::Abort);
    let mut docs = vec!["missing.txt".to_string()];
    docs.extend(crate::common::abstract_names(3));

    let result = Pipeline::new(config).run(&Query::parse("a."), docs, &store, &progress);

    assert!(result.is_err());
    assert_eq!(progress.into_lines(), ["Worker 0 is calculating missing.txt"]);
}

#[test]
fn test_empty_abstract_file() {
    let dir = abstracts_dir(&[""]);
    let store = FsStore::new(dir.path());
    let results = run_pool(1, "alpha beta", vec!["abstract_1.txt".to_string()], &store);

    assert_eq!(results.len(), 1);
    assert_eq!(results.scores()[0].score, 0.0);
    assert_eq!(results.summary("abstract_1.txt"), Some(""));
}
