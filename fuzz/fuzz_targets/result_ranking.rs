// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for result ranking.
//!
//! Whatever scores arrive, the ranking is sorted by score descending then
//! reference ascending, is cut to min(N, available), and numbers rows from 1.

#![no_main]

use abstractor::rank;
use abstractor::testing::frozen;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    scores: Vec<(u8, u16)>,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let mut rows: Vec<(String, f64)> = input
        .scores
        .iter()
        .map(|&(id, raw)| (format!("abstract_{}.txt", id), raw as f64 / u16::MAX as f64))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows.dedup_by(|a, b| a.0 == b.0);

    let borrowed: Vec<(&str, f64, &str)> =
        rows.iter().map(|(r, s)| (r.as_str(), *s, "")).collect();
    let ranked = rank(&frozen(&borrowed), input.limit as usize);

    assert_eq!(ranked.len(), (input.limit as usize).min(rows.len()));
    for (i, doc) in ranked.iter().enumerate() {
        assert_eq!(doc.rank, i + 1);
    }
    for pair in ranked.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].reference < pair[1].reference),
            "misordered: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
});
