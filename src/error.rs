// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the abstractor crate.
//!
//! Three failure families exist and they never mix. Manifest errors are
//! configuration problems caught before any worker spawns. Store errors are
//! per-document and are either skipped or escalated by the pipeline,
//! depending on [`MissingDocumentPolicy`](crate::MissingDocumentPolicy).
//! Pipeline errors end a run after every worker has joined.

use std::path::PathBuf;

/// Errors raised while reading the input manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read at all.
    #[error("failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first line did not hold `T A N`.
    #[error("malformed header: {0}")]
    Header(String),

    /// A pool needs at least one worker.
    #[error("worker count must be at least 1")]
    NoWorkers,

    /// The manifest promised more document lines than it carries.
    #[error("expected {expected} document references, found {found}")]
    MissingDocuments { expected: usize, found: usize },

    /// A document line was blank.
    #[error("document reference on line {line} is empty")]
    EmptyReference { line: usize },
}

/// Errors raised by a [`DocumentStore`](crate::DocumentStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("failed to read {reference}: {source}")]
    Unreadable {
        reference: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Reference of the document that failed to load.
    pub fn reference(&self) -> &str {
        match self {
            StoreError::NotFound(reference) => reference,
            StoreError::Unreadable { reference, .. } => reference,
        }
    }
}

/// Errors that end a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The worker pool could not be created.
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// A document failed to load under the abort policy.
    #[error("aborted: {0}")]
    DocumentUnavailable(#[source] StoreError),
}

/// Top-level error for callers that drive a whole job.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for abstractor results.
pub type Result<T> = std::result::Result<T, Error>;
