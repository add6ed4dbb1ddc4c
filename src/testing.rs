// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::pipeline::{FrozenResults, MemoryStore, ResultAggregator, SummaryRecord};
use crate::scoring::{DocRef, ScoreRecord};

/// Build frozen results directly from `(reference, score, summary)` rows,
/// bypassing the worker pool.
pub fn frozen(rows: &[(&str, f64, &str)]) -> FrozenResults {
    let aggregator = ResultAggregator::with_capacity(rows.len());
    for &(reference, score, summary) in rows {
        aggregator.publish(
            ScoreRecord {
                score,
                reference: reference.to_string(),
            },
            SummaryRecord {
                reference: reference.to_string(),
                summary: summary.to_string(),
            },
        );
    }
    aggregator.freeze()
}

/// `abstract_1.txt`, `abstract_2.txt`, ... up to `count`.
pub fn abstract_names(count: usize) -> Vec<DocRef> {
    (1..=count).map(|i| format!("abstract_{}.txt", i)).collect()
}

/// A memory store with one document per text, named like [`abstract_names`].
pub fn make_store(texts: &[&str]) -> MemoryStore {
    abstract_names(texts.len())
        .into_iter()
        .zip(texts.iter().copied())
        .collect()
}
