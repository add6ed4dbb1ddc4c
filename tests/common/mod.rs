//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use abstractor::{
    DocRef, DocumentStore, FrozenResults, NoProgress, Pipeline, PipelineConfig, Query,
};
use tempfile::TempDir;

// Re-export canonical test utilities from abstractor::testing
pub use abstractor::testing::{abstract_names, make_store};

// ============================================================================
// FIXTURE PATHS
// ============================================================================

/// Directory containing the checked-in fixture manifests.
pub const FIXTURES_DIR: &str = "data/fixtures";

/// Abstracts referenced by every fixture manifest.
pub const FIXTURE_ABSTRACTS: &str = "data/fixtures/abstracts";

pub fn fixture(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

// ============================================================================
// PIPELINE HELPERS
// ============================================================================

pub fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("worker count must be non-zero")
}

/// Run the pool with the skip policy and no progress output.
pub fn run_pool(
    workers_count: usize,
    query: &str,
    documents: Vec<DocRef>,
    store: &dyn DocumentStore,
) -> FrozenResults {
    Pipeline::new(PipelineConfig::new(workers(workers_count)))
        .run(&Query::parse(query), documents, store, &NoProgress)
        .expect("pipeline run failed")
}

/// A temporary abstracts directory with `abstract_<i>.txt` files.
pub fn abstracts_dir(texts: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, text) in abstract_names(texts.len()).iter().zip(texts) {
        fs::write(dir.path().join(name), text).expect("Failed to write abstract");
    }
    dir
}

/// Write a manifest next to (not inside) the abstracts.
pub fn write_manifest(dir: &Path, header: (usize, usize, usize), query: &str, docs: &[DocRef]) {
    let mut content = format!("{} {} {}\n{}\n", header.0, header.1, header.2, query);
    for doc in docs {
        content.push_str(doc);
        content.push('\n');
    }
    fs::write(dir.join("input.txt"), content).expect("Failed to write manifest");
}

/// Deterministic pseudo-random corpus: `count` documents over a small
/// vocabulary, so scores collide often and tie-breaking gets exercised.
pub fn synthetic_corpus(count: usize) -> Vec<String> {
    const WORDS: &[&str] = &[
        "protein", "folding", "structure", "cell", "graph", "model", "data", "energy",
    ];
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            let mut text = String::new();
            for sentence in 0..3 {
                for word in 0..4 {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    if word > 0 {
                        text.push(' ');
                    }
                    text.push_str(WORDS[(state % WORDS.len() as u64) as usize]);
                }
                text.push_str(if sentence < 2 { ". " } else { "." });
            }
            text
        })
        .collect()
}
