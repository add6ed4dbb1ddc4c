// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where document text comes from.
//!
//! Workers call [`DocumentStore::load`] with no lock held. The filesystem
//! store mirrors the classic layout where abstracts sit in a sibling
//! directory of the input file; the memory store backs tests and benches.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Default root of the abstracts directory, relative to the working directory.
pub const DEFAULT_ABSTRACTS_DIR: &str = "../abstracts";

/// Source of document text, shared by every worker.
pub trait DocumentStore: Send + Sync {
    /// Full text of `reference`, or why it could not be read.
    fn load(&self, reference: &str) -> Result<String, StoreError>;
}

/// Reads `<root>/<reference>` from disk.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the document,
/// so a Latin-1 abstract still scores on its ASCII words.
#[derive(Clone, Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for FsStore {
    fn default() -> Self {
        FsStore::new(DEFAULT_ABSTRACTS_DIR)
    }
}

impl DocumentStore for FsStore {
    fn load(&self, reference: &str) -> Result<String, StoreError> {
        let path = self.root.join(reference);
        let bytes = fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(reference.to_string()),
            _ => StoreError::Unreadable {
                reference: reference.to_string(),
                source,
            },
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory documents keyed by reference.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reference: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(reference.into(), text.into());
    }

    pub fn with(mut self, reference: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(reference, text);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<R, T> FromIterator<(R, T)> for MemoryStore
where
    R: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (R, T)>>(iter: I) -> Self {
        MemoryStore {
            documents: iter
                .into_iter()
                .map(|(r, t)| (r.into(), t.into()))
                .collect(),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, reference: &str) -> Result<String, StoreError> {
        self.documents
            .get(reference)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(reference.to_string()))
    }
}
