// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result aggregation across workers.
//!
//! Scores and summaries live in separate append-only vectors with separate
//! locks, so a worker appending a summary never waits on one appending a
//! score. Workers only see [`ResultAggregator::publish`]. Once the pool has
//! joined, [`ResultAggregator::freeze`] consumes the aggregator and hands
//! back read-only [`FrozenResults`].

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;

use crate::scoring::{DocRef, ScoreRecord};

/// One document's extractive summary. Created once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub reference: DocRef,
    pub summary: String,
}

#[derive(Debug, Default)]
pub struct ResultAggregator {
    scores: Mutex<Vec<ScoreRecord>>,
    summaries: Mutex<Vec<SummaryRecord>>,
    skipped: Mutex<Vec<DocRef>>,
}

impl ResultAggregator {
    pub fn with_capacity(documents: usize) -> Self {
        ResultAggregator {
            scores: Mutex::new(Vec::with_capacity(documents)),
            summaries: Mutex::new(Vec::with_capacity(documents)),
            skipped: Mutex::new(Vec::new()),
        }
    }

    /// Publish both records for one fully processed document.
    ///
    /// Called only after scoring and summarizing have both succeeded, so a
    /// document that fails to load contributes to neither collection.
    pub fn publish(&self, score: ScoreRecord, summary: SummaryRecord) {
        debug_assert_eq!(score.reference, summary.reference);
        self.scores.lock().push(score);
        self.summaries.lock().push(summary);
    }

    /// Note a document that was claimed but could not be processed.
    pub fn record_skipped(&self, reference: DocRef) {
        self.skipped.lock().push(reference);
    }

    /// Stop accepting records. Only callable once the workers are gone,
    /// since it takes the aggregator by value.
    pub fn freeze(self) -> FrozenResults {
        let summaries = self
            .summaries
            .into_inner()
            .into_iter()
            .map(|record| (record.reference, record.summary))
            .collect();
        let mut skipped = self.skipped.into_inner();
        skipped.sort();

        FrozenResults {
            scores: self.scores.into_inner(),
            summaries,
            skipped,
        }
    }
}

/// Everything the pool produced, read-only.
#[derive(Clone, Debug, Default)]
pub struct FrozenResults {
    scores: Vec<ScoreRecord>,
    summaries: HashMap<DocRef, String>,
    skipped: Vec<DocRef>,
}

impl FrozenResults {
    /// Score records in publication order (scheduling-dependent).
    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    pub fn summary(&self, reference: &str) -> Option<&str> {
        self.summaries.get(reference).map(String::as_str)
    }

    /// Documents that failed to load under the skip policy, sorted.
    pub fn skipped(&self) -> &[DocRef] {
        &self.skipped
    }

    /// Number of scored documents.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn summary_count(&self) -> usize {
        self.summaries.len()
    }

    /// Iterate `(score record, summary)` pairs in publication order.
    pub fn iter(&self) -> impl Iterator<Item = (&ScoreRecord, &str)> {
        self.scores.iter().map(|record| {
            let summary = self.summary(&record.reference).unwrap_or_default();
            (record, summary)
        })
    }
}
