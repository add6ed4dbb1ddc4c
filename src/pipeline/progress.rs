// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Progress reporting from inside the worker pool.
//!
//! Every claimed document produces a `claimed` event and, once its records
//! are published (or it is skipped), a `finished` event. Events from
//! different workers interleave freely; sinks must not assume any order.

use std::fmt;

use parking_lot::Mutex;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Display identity of a worker. Carries no behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub usize);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worker {}", self.0)
    }
}

/// Receiver of per-document progress events.
pub trait ProgressSink: Send + Sync {
    fn claimed(&self, worker: WorkerId, reference: &str);

    fn finished(&self, _worker: WorkerId, _reference: &str) {}
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn claimed(&self, _worker: WorkerId, _reference: &str) {}
}

/// Emits structured `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn claimed(&self, worker: WorkerId, reference: &str) {
        tracing::debug!(worker = worker.0, reference, "claimed document");
    }

    fn finished(&self, worker: WorkerId, reference: &str) {
        tracing::trace!(worker = worker.0, reference, "finished document");
    }
}

/// Collects "`<worker>` is calculating `<reference>`" lines for the report.
#[derive(Debug, Default)]
pub struct ReportProgress {
    lines: Mutex<Vec<String>>,
}

impl ReportProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order the workers claimed their documents.
    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner()
    }
}

impl ProgressSink for ReportProgress {
    fn claimed(&self, worker: WorkerId, reference: &str) {
        self.lines
            .lock()
            .push(format!("{} is calculating {}", worker, reference));
    }
}

/// Forwards each event to several sinks.
#[derive(Default)]
pub struct Fanout<'a> {
    sinks: Vec<&'a dyn ProgressSink>,
}

impl<'a> Fanout<'a> {
    pub fn new() -> Self {
        Fanout { sinks: Vec::new() }
    }

    pub fn with(mut self, sink: &'a dyn ProgressSink) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl ProgressSink for Fanout<'_> {
    fn claimed(&self, worker: WorkerId, reference: &str) {
        for sink in &self.sinks {
            sink.claimed(worker, reference);
        }
    }

    fn finished(&self, worker: WorkerId, reference: &str) {
        for sink in &self.sinks {
            sink.finished(worker, reference);
        }
    }
}

/// Terminal progress bar advanced once per finished document.
#[cfg(feature = "progress")]
pub struct BarProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl BarProgress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(create_progress_style());
        bar.set_prefix("Scoring");
        BarProgress { bar }
    }

    pub fn finish(&self, message: impl Into<std::borrow::Cow<'static, str>>) {
        self.bar.finish_with_message(message);
    }
}

#[cfg(feature = "progress")]
impl ProgressSink for BarProgress {
    fn claimed(&self, _worker: WorkerId, _reference: &str) {}

    fn finished(&self, _worker: WorkerId, reference: &str) {
        self.bar.inc(1);
        self.bar.set_message(reference.to_string());
    }
}

/// Style for the scoring progress bar.
#[cfg(feature = "progress")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}
