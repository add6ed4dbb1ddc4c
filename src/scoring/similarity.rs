// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaccard similarity over sorted token sets.
//!
//! ```text
//! score(Q, D) = |Q ∩ D| / |Q ∪ D|
//! ```
//!
//! Both sets are sorted and unique, so the intersection is a single merge
//! walk and the union size falls out as `|Q| + |D| - |Q ∩ D|`. No allocation.
//!
//! # Degenerate case
//!
//! Two empty sets have an empty union. That is defined to score `0.0`: an
//! empty query matches nothing and an empty document is matched by nothing.

use std::cmp::Ordering;

use serde::Serialize;

use crate::contracts::check_score_in_range;
use crate::text::TokenSet;

/// Reference to a document in the store (its filename).
pub type DocRef = String;

/// Score assigned when both token sets are empty.
pub const EMPTY_UNION_SCORE: f64 = 0.0;

/// One document's similarity to the query. Created once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub score: f64,
    pub reference: DocRef,
}

/// Count tokens present in both sorted sets.
pub fn intersection_size(a: &[String], b: &[String]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

/// Jaccard similarity of two token sets, in `[0, 1]`.
///
/// `1.0` exactly when the sets are equal and non-empty, `0.0` when they are
/// disjoint or both empty.
pub fn jaccard(query: &TokenSet, document: &TokenSet) -> f64 {
    let shared = intersection_size(query.as_slice(), document.as_slice());
    let union = query.len() + document.len() - shared;
    if union == 0 {
        return EMPTY_UNION_SCORE;
    }

    let score = shared as f64 / union as f64;
    check_score_in_range(score);
    score
}
