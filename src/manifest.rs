// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Job manifest: the input file that names the query and the abstracts.
//!
//! ```text
//! 3 5 2                      <- workers, documents, results to report
//! protein folding structure  <- query
//! abstract_1.txt             <- one document reference per line
//! abstract_2.txt
//! ...
//! ```
//!
//! Every error here is fatal and happens before any worker starts.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ManifestError;
use crate::scoring::DocRef;
use crate::text::TokenSet;

/// The query, kept in two shapes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Distinct terms in the order they were read. Summaries scan this.
    pub terms: Vec<String>,
    /// Sorted set of the same terms. Scoring uses this.
    #[serde(skip)]
    pub set: TokenSet,
}

impl Query {
    /// Split a query line on whitespace.
    pub fn parse(line: &str) -> Self {
        let mut terms: Vec<String> = Vec::new();
        for word in line.split_whitespace() {
            if !terms.iter().any(|t| t == word) {
                terms.push(word.to_string());
            }
        }
        let set = TokenSet::from_tokens(terms.iter().cloned());
        Query { terms, set }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A parsed job manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    pub workers: NonZeroUsize,
    pub result_count: usize,
    pub query: Query,
    pub documents: Vec<DocRef>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Number of documents the manifest lists.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

fn parse_header(line: &str) -> Result<(usize, usize, usize), ManifestError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(ManifestError::Header(format!(
            "expected `T A N`, found {:?}",
            line.trim()
        )));
    }

    let number = |name: &str, raw: &str| {
        raw.parse::<usize>().map_err(|_| {
            ManifestError::Header(format!("{} must be a non-negative integer, got {:?}", name, raw))
        })
    };

    Ok((
        number("worker count", fields[0])?,
        number("document count", fields[1])?,
        number("result count", fields[2])?,
    ))
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let header = lines
            .next()
            .ok_or_else(|| ManifestError::Header("input is empty".to_string()))?;
        let (workers, expected, result_count) = parse_header(header)?;
        let workers = NonZeroUsize::new(workers).ok_or(ManifestError::NoWorkers)?;

        let query = Query::parse(lines.next().unwrap_or_default());

        // Capacity hint only; the input length bounds the real count
        let mut documents = Vec::with_capacity(expected.min(s.len() / 2));
        for (i, line) in lines.by_ref().take(expected).enumerate() {
            let reference = line.trim();
            if reference.is_empty() {
                // header and query occupy lines 1 and 2
                return Err(ManifestError::EmptyReference { line: i + 3 });
            }
            documents.push(reference.to_string());
        }

        if documents.len() < expected {
            return Err(ManifestError::MissingDocuments {
                expected,
                found: documents.len(),
            });
        }

        let extra = lines.filter(|l| !l.trim().is_empty()).count();
        if extra > 0 {
            tracing::debug!(extra, "ignoring lines after the document list");
        }

        Ok(Manifest {
            workers,
            result_count,
            query,
            documents,
        })
    }
}
