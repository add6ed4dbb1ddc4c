// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for extractive summaries.
//!
//! Every sentence in a summary must come from the document, in document
//! order, and must contain a query term as a whole word.

#![no_main]

use abstractor::{contains_word, split_sentences, summarize, Query};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    query: &'a str,
    document: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let query = Query::parse(input.query);
    let sentences = split_sentences(input.document);
    let summary = summarize(&sentences, &query.terms);

    if query.is_empty() {
        assert!(summary.is_empty());
        return;
    }

    assert_eq!(summary.trim(), summary, "summary has stray whitespace");

    let mut remaining = sentences.iter();
    for picked in split_sentences(&summary) {
        assert!(
            remaining.any(|s| *s == picked),
            "summary sentence {:?} missing or out of order",
            picked
        );
        assert!(
            query.terms.iter().any(|t| contains_word(&picked, t)),
            "sentence {:?} has no query term",
            picked
        );
    }
});
