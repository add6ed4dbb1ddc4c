// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how abstracts get their numbers and their order.
//!
//! A score is plain Jaccard overlap between the query's token set and the
//! document's token set. Ranking sorts by that score and breaks ties on the
//! document reference, so two runs over the same inputs print the same
//! report no matter how the workers interleaved.

mod similarity;
pub mod ranking;

pub use similarity::*;
pub use ranking::{compare_scores, rank, RankedDocument};
