// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multithreaded abstract ranking.
//!
//! Given a query and a fixed collection of abstracts, a bounded pool of
//! workers scores every abstract by Jaccard overlap with the query, builds
//! an extractive summary from the sentences that mention a query term, and
//! the top N are reported.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────────┐     ┌─────────────┐
//! │ manifest.rs │────▶│          pipeline/           │────▶│ scoring/    │
//! │ (T A N,     │     │ WorkQueue → Worker × T →     │     │ ranking.rs  │
//! │  query,     │     │ ResultAggregator → Frozen    │     │ (top N)     │
//! │  documents) │     └──────────────────────────────┘     └─────────────┘
//! └─────────────┘            │ per document                      │
//!                            ▼                                   ▼
//!              text.rs → scoring/similarity.rs            report.rs
//!                      → summary.rs                       (text / JSON)
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use abstractor::{FsStore, Manifest, NoProgress, Pipeline, PipelineConfig, Report, ReportFormat};
//! use std::path::Path;
//!
//! let manifest = Manifest::from_path(Path::new("input.txt"))?;
//! let store = FsStore::new("../abstracts");
//! let results = Pipeline::new(PipelineConfig::new(manifest.workers))
//!     .run(&manifest.query, manifest.documents.clone(), &store, &NoProgress)?;
//!
//! let report = Report::new(&manifest.query, &results, manifest.result_count);
//! report.write(&mut std::io::stdout(), ReportFormat::Text)?;
//! # Ok::<(), abstractor::Error>(())
//! ```

pub mod contracts;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod summary;
pub mod testing;
pub mod text;

pub use error::{Error, ManifestError, PipelineError, Result, StoreError};
pub use manifest::{Manifest, Query};
pub use pipeline::{
    dedup_references, process_document, DocumentStore, Fanout, FrozenResults, FsStore,
    MemoryStore, MissingDocumentPolicy, NoProgress, Pipeline, PipelineConfig, ProgressSink,
    ReportProgress, ResultAggregator, SummaryRecord, TracingProgress, WorkQueue, WorkerId,
    DEFAULT_ABSTRACTS_DIR,
};
#[cfg(feature = "progress")]
pub use pipeline::BarProgress;
pub use report::{Report, ReportFormat};
pub use scoring::{
    compare_scores, intersection_size, jaccard, rank, DocRef, RankedDocument, ScoreRecord,
    EMPTY_UNION_SCORE,
};
pub use summary::{contains_word, summarize};
pub use text::{analyze, split_sentences, tokenize, AnalyzedText, TokenSet};
