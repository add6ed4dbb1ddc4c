// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored abstracts get sorted and cut to the top N.
//!
//! Workers publish records in whatever order the scheduler lets them, so the
//! raw score vector is a race. Sorting by score alone would leave equal
//! scores in that race order. A secondary key on the document reference
//! makes the report a pure function of the inputs.

use std::cmp::Ordering;

use serde::Serialize;

use crate::contracts::check_ranking_ordered;
use crate::pipeline::FrozenResults;

use super::{DocRef, ScoreRecord};

/// One row of the final report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedDocument {
    /// 1-based position in the report.
    pub rank: usize,
    pub reference: DocRef,
    pub score: f64,
    pub summary: String,
}

/// Compare two score records for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Reference** - ascending, for determinism among equal scores
pub fn compare_scores(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.reference.cmp(&b.reference),
        ord => ord,
    }
}

/// Select the top `limit` documents, each joined with its summary.
///
/// `limit` is clamped to the number of scored documents: asking for more
/// results than exist returns all of them.
pub fn rank(results: &FrozenResults, limit: usize) -> Vec<RankedDocument> {
    let mut order: Vec<&ScoreRecord> = results.scores().iter().collect();
    order.sort_by(|a, b| compare_scores(a, b));

    let take = limit.min(order.len());
    if take < limit {
        tracing::debug!(requested = limit, available = take, "clamping result count");
    }

    let ranked: Vec<RankedDocument> = order
        .into_iter()
        .take(take)
        .enumerate()
        .map(|(i, record)| RankedDocument {
            rank: i + 1,
            reference: record.reference.clone(),
            score: record.score,
            summary: results
                .summary(&record.reference)
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    check_ranking_ordered(&ranked);
    ranked
}
