// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization and sentence splitting.
//!
//! Tokens are whatever `split_whitespace` yields: no lowercasing, no
//! punctuation stripping, no stemming. `"Rust."` and `"rust"` are different
//! tokens. Sentences are cut at every `.` after the text has been collapsed
//! to single spaces, so a summary reproduces the document one word apart
//! from the next regardless of how the file was wrapped.

use serde::Serialize;

use crate::contracts::check_token_set_sorted;

/// A sorted, deduplicated set of tokens.
///
/// Set intersection and union in [`jaccard`](crate::jaccard) walk two of
/// these in lockstep, which only works because both are sorted and unique.
/// The only way to build one is through [`TokenSet::from_tokens`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSet(Vec<String>);

impl TokenSet {
    /// Sort and dedup any token sequence into a set.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        tokens.sort_unstable();
        tokens.dedup();
        check_token_set_sorted(&tokens);
        TokenSet(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// O(log n) membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(token))
            .is_ok()
    }
}

/// A document after tokenization: its token set and its sentences in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzedText {
    pub tokens: TokenSet,
    pub sentences: Vec<String>,
}

/// Tokenize `text` and split it into sentences in one pass over the words.
pub fn analyze(text: &str) -> AnalyzedText {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    AnalyzedText {
        tokens: TokenSet::from_tokens(words),
        sentences: sentences_of_collapsed(&collapsed),
    }
}

/// Whitespace-delimited token set of `text`.
pub fn tokenize(text: &str) -> TokenSet {
    TokenSet::from_tokens(text.split_whitespace())
}

/// Split `text` into sentences, each ending at (and including) a `.`.
///
/// - Whitespace runs collapse to one space before splitting.
/// - Leading whitespace of each sentence is trimmed.
/// - Text without any `.` is a single sentence.
/// - Text after the last `.` is dropped when at least one `.` exists.
/// - Empty or all-whitespace text has no sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    sentences_of_collapsed(&collapsed)
}

fn sentences_of_collapsed(collapsed: &str) -> Vec<String> {
    if collapsed.is_empty() {
        return Vec::new();
    }
    if !collapsed.contains('.') {
        return vec![collapsed.to_string()];
    }

    collapsed
        .split_inclusive('.')
        .filter(|piece| piece.ends_with('.'))
        .map(str::trim_start)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}
