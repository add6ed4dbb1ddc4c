// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shared work queue.
//!
//! A FIFO of document references behind one mutex. The critical section is a
//! single `pop_front`; loading and scoring happen after the guard drops.
//! Entries are never re-inserted, so "empty" is final and doubles as the
//! pool's stop signal.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::scoring::DocRef;

#[derive(Debug, Default)]
pub struct WorkQueue {
    pending: Mutex<VecDeque<DocRef>>,
}

impl WorkQueue {
    pub fn from_references<I>(references: I) -> Self
    where
        I: IntoIterator<Item = DocRef>,
    {
        WorkQueue {
            pending: Mutex::new(references.into_iter().collect()),
        }
    }

    /// Claim the next document, or `None` once the queue is drained.
    ///
    /// No two calls ever return the same entry.
    pub fn take(&self) -> Option<DocRef> {
        self.pending.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}
