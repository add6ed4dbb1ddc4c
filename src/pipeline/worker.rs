// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single worker: claim, load, analyze, score, summarize, publish.
//!
//! ```text
//! RUNNING ──take() = Some──▶ PROCESSING ──publish/skip──▶ RUNNING
//!    │
//!    └──take() = None or abort flag set──▶ DONE
//! ```
//!
//! Workers share nothing mutable except through the queue, the aggregator
//! and the abort flag. The document load happens with no lock held.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::manifest::Query;
use crate::scoring::{jaccard, DocRef, ScoreRecord};
use crate::summary::summarize;
use crate::text::analyze;

use super::{
    DocumentStore, MissingDocumentPolicy, ProgressSink, ResultAggregator, SummaryRecord,
    WorkQueue, WorkerId,
};

/// Score and summarize one document's text against the query.
///
/// Pure: no shared state is touched. This is the whole per-document
/// computation; workers wrap it with claiming and publishing.
pub fn process_document(
    query: &Query,
    reference: &str,
    text: &str,
) -> (ScoreRecord, SummaryRecord) {
    let analyzed = analyze(text);
    let score = jaccard(&query.set, &analyzed.tokens);
    let summary = summarize(&analyzed.sentences, &query.terms);
    (
        ScoreRecord {
            score,
            reference: reference.to_string(),
        },
        SummaryRecord {
            reference: reference.to_string(),
            summary,
        },
    )
}

/// Everything a worker borrows for the length of the run.
pub(crate) struct Worker<'a> {
    pub id: WorkerId,
    pub query: &'a Query,
    pub queue: &'a WorkQueue,
    pub aggregator: &'a ResultAggregator,
    pub store: &'a dyn DocumentStore,
    pub progress: &'a dyn ProgressSink,
    pub policy: MissingDocumentPolicy,
    pub abort: &'a AtomicBool,
    pub failure: &'a Mutex<Option<StoreError>>,
}

impl Worker<'_> {
    /// Drain the queue. Returns how many documents this worker published.
    pub fn run(self) -> usize {
        let mut processed = 0;
        while !self.abort.load(Ordering::Acquire) {
            let Some(reference) = self.queue.take() else {
                break;
            };
            self.progress.claimed(self.id, &reference);

            match self.store.load(&reference) {
                Ok(text) => {
                    let (score, summary) = process_document(self.query, &reference, &text);
                    tracing::debug!(
                        worker = self.id.0,
                        reference = %reference,
                        score = score.score,
                        "scored document"
                    );
                    self.aggregator.publish(score, summary);
                    processed += 1;
                }
                Err(err) => {
                    if !self.handle_failure(reference.clone(), err) {
                        self.progress.finished(self.id, &reference);
                        break;
                    }
                }
            }

            self.progress.finished(self.id, &reference);
        }

        tracing::debug!(worker = self.id.0, processed, "worker done");
        processed
    }

    /// Apply the missing-document policy. Returns whether to keep going.
    fn handle_failure(&self, reference: DocRef, err: StoreError) -> bool {
        match self.policy {
            MissingDocumentPolicy::Skip => {
                tracing::warn!(worker = self.id.0, error = %err, "skipping document");
                self.aggregator.record_skipped(reference);
                true
            }
            MissingDocumentPolicy::Abort => {
                tracing::error!(worker = self.id.0, error = %err, "aborting run");
                self.abort.store(true, Ordering::Release);
                self.failure.lock().get_or_insert(err);
                false
            }
        }
    }
}
