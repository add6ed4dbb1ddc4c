//! Library round trip over `data/fixtures`.

use std::path::Path;

use abstractor::{
    FsStore, Manifest, ManifestError, NoProgress, Pipeline, PipelineConfig, Report, ReportFormat,
};

use crate::common::{fixture, FIXTURE_ABSTRACTS};

fn run_fixture(name: &str) -> Report {
    let manifest = Manifest::from_path(Path::new(&fixture(name))).unwrap();
    let store = FsStore::new(FIXTURE_ABSTRACTS);
    let results = Pipeline::new(PipelineConfig::new(manifest.workers))
        .run(&manifest.query, manifest.documents.clone(), &store, &NoProgress)
        .unwrap();
    Report::new(&manifest.query, &results, manifest.result_count)
}

#[test]
fn test_basic_fixture_report() {
    let text = run_fixture("basic.txt").render(ReportFormat::Text).unwrap();
    assert_eq!(
        text,
        "###\n\
         Result 1:\nFile: abstract_4.txt\nScore: 1.0000\nSummary: folding protein structure\n\
         ###\n\
         Result 2:\nFile: abstract_1.txt\nScore: 0.3750\n\
         Summary: protein folding drives structure formation. folding is studied widely.\n\
         ###\n\
         Result 3:\nFile: abstract_2.txt\nScore: 0.1000\nSummary: protein data is large.\n\
         ###\n"
    );
}

#[test]
fn test_basic_fixture_parses() {
    let manifest = Manifest::from_path(Path::new(&fixture("basic.txt"))).unwrap();
    assert_eq!(manifest.workers.get(), 2);
    assert_eq!(manifest.document_count(), 4);
    assert_eq!(manifest.result_count, 3);
    assert_eq!(manifest.query.terms, ["protein", "folding", "structure"]);
}

#[test]
fn test_missing_fixture_skips_absent_abstract() {
    let report = run_fixture("missing.txt");

    assert_eq!(report.skipped, ["abstract_9.txt"]);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].reference, "abstract_2.txt");
    assert!((report.results[0].score - 0.125).abs() < 1e-12);
    assert_eq!(report.results[0].summary, "protein data is large.");
}

#[test]
fn test_truncated_fixture_is_rejected() {
    let err = Manifest::from_path(Path::new(&fixture("truncated.txt"))).unwrap_err();
    assert!(
        matches!(err, ManifestError::MissingDocuments { expected: 5, found: 0 }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_json_report_lists_skipped() {
    let json = run_fixture("missing.txt").render(ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["skipped"][0], "abstract_9.txt");
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
}
