// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extractive summaries: the sentences of a document that mention the query.

/// Does `sentence` contain `term` as a whole whitespace-delimited word?
///
/// `"beta"` matches `"alpha beta gamma."` but not `"alphabeta gamma."`.
pub fn contains_word(sentence: &str, term: &str) -> bool {
    sentence.split_whitespace().any(|word| word == term)
}

/// Build a summary from every sentence that contains at least one query
/// term, kept in document order and joined by single spaces.
///
/// Terms are tried in the order given; the first hit admits the sentence and
/// the rest are skipped. No qualifying sentence gives an empty summary.
pub fn summarize<S, T>(sentences: &[S], terms: &[T]) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut summary = String::new();
    for sentence in sentences {
        let sentence = sentence.as_ref().trim();
        if terms.iter().any(|term| contains_word(sentence, term.as_ref())) {
            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(sentence);
        }
    }
    summary
}
