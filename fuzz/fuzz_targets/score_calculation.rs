// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, lie in [0, 1], be symmetric and be deterministic.
//! 1.0 means the token sets are equal and non-empty; 0.0 means they share
//! nothing.

#![no_main]

use abstractor::{intersection_size, jaccard, tokenize};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    query: &'a str,
    document: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let query = tokenize(input.query);
    let document = tokenize(input.document);

    let score = jaccard(&query, &document);
    assert!(score.is_finite(), "non-finite score {}", score);
    assert!((0.0..=1.0).contains(&score), "score {} out of range", score);

    // Same inputs, same bits
    assert_eq!(score.to_bits(), jaccard(&query, &document).to_bits());
    assert_eq!(score, jaccard(&document, &query));

    assert_eq!(score == 1.0, !query.is_empty() && query == document);
    let shared = intersection_size(query.as_slice(), document.as_slice());
    assert_eq!(score == 0.0, shared == 0);
});
