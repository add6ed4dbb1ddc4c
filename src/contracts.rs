// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring pipeline.
//!
//! Debug-mode assertions for the invariants the rest of the crate leans on:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` only)
//! 2. **Early failure** while developing or running the test suite
//!
//! | Contract                        | Invariant                                     |
//! |---------------------------------|-----------------------------------------------|
//! | `check_token_set_sorted`        | token sets are strictly ascending             |
//! | `check_score_in_range`          | Jaccard score is finite and in `[0, 1]`       |
//! | `check_results_consistent`      | one score and one summary per document        |
//! | `check_ranking_ordered`         | ranked output is non-increasing in score      |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)

use crate::pipeline::FrozenResults;
use crate::scoring::RankedDocument;

/// Check that a token slice is strictly ascending (sorted, no duplicates).
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair that is out of order or equal.
#[inline]
pub fn check_token_set_sorted(tokens: &[String]) {
    #[cfg(debug_assertions)]
    for (i, pair) in tokens.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: token set not strictly ascending at {}: {:?} >= {:?}",
            i,
            pair[0],
            pair[1]
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = tokens;
}

/// Check that a score is a valid Jaccard value.
#[inline]
pub fn check_score_in_range(score: f64) {
    debug_assert!(
        score.is_finite() && (0.0..=1.0).contains(&score),
        "Contract violation: score {} outside [0, 1]",
        score
    );
}

/// Check that frozen results hold exactly one score and one summary per
/// document, and that no skipped document slipped into either collection.
#[inline]
pub fn check_results_consistent(results: &FrozenResults) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::with_capacity(results.len());
        for record in results.scores() {
            debug_assert!(
                seen.insert(record.reference.as_str()),
                "Contract violation: {} scored more than once",
                record.reference
            );
            debug_assert!(
                results.summary(&record.reference).is_some(),
                "Contract violation: {} has a score but no summary",
                record.reference
            );
        }
        debug_assert_eq!(
            results.summary_count(),
            results.len(),
            "Contract violation: score and summary counts differ"
        );
        for skipped in results.skipped() {
            debug_assert!(
                !seen.contains(skipped.as_str()),
                "Contract violation: skipped document {} has a score",
                skipped
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = results;
}

/// Check that ranked output is ordered by score, descending, with 1-based
/// consecutive ranks.
#[inline]
pub fn check_ranking_ordered(ranked: &[RankedDocument]) {
    for (i, doc) in ranked.iter().enumerate() {
        debug_assert_eq!(
            doc.rank,
            i + 1,
            "Contract violation: rank {} at position {}",
            doc.rank,
            i
        );
    }
    for pair in ranked.windows(2) {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: {} ({}) ranked above {} ({})",
            pair[0].reference,
            pair[0].score,
            pair[1].reference,
            pair[1].score
        );
    }
}
