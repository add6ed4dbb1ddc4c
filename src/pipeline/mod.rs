// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The concurrent scoring pipeline.
//!
//! The orchestrator owns the queue and the aggregator; workers get shared
//! references to both plus the immutable query. Nothing global, nothing
//! reachable from outside the run.
//!
//! ```text
//!              ┌─────────────┐
//! documents ──▶│  WorkQueue  │──take()──┐
//!              └─────────────┘          │
//!                         ┌─────────────┼─────────────┐
//!                         ▼             ▼             ▼
//!                     Worker 0      Worker 1  ...  Worker T-1
//!                         │   load → analyze → score → summarize
//!                         └─────────────┼─────────────┘
//!                                       ▼ publish()
//!                              ┌──────────────────┐
//!                              │ ResultAggregator │──freeze()──▶ FrozenResults
//!                              └──────────────────┘
//! ```
//!
//! The pool is a dedicated Rayon pool sized to exactly the configured worker
//! count, with one long-running task per worker. There is no cancellation
//! beyond the abort policy, and `run` returns only after every worker has
//! joined.

mod aggregator;
mod progress;
mod queue;
mod store;
mod worker;

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::contracts::check_results_consistent;
use crate::error::PipelineError;
use crate::manifest::Query;
use crate::scoring::DocRef;

pub use aggregator::{FrozenResults, ResultAggregator, SummaryRecord};
#[cfg(feature = "progress")]
pub use progress::BarProgress;
pub use progress::{Fanout, NoProgress, ProgressSink, ReportProgress, TracingProgress, WorkerId};
pub use queue::WorkQueue;
pub use store::{DocumentStore, FsStore, MemoryStore, DEFAULT_ABSTRACTS_DIR};
pub use worker::process_document;

use worker::Worker;

/// What to do when a document cannot be loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingDocumentPolicy {
    /// Log it, leave it out of the results, keep going.
    #[default]
    Skip,
    /// Stop claiming new documents and fail the run.
    Abort,
}

/// Pool configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub workers: NonZeroUsize,
    pub policy: MissingDocumentPolicy,
}

impl PipelineConfig {
    pub fn new(workers: NonZeroUsize) -> Self {
        PipelineConfig {
            workers,
            policy: MissingDocumentPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingDocumentPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Runs a fixed-size worker pool over a set of documents.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Score and summarize every document, returning once all workers join.
    ///
    /// Each distinct reference is processed exactly once. Under
    /// [`MissingDocumentPolicy::Skip`] unreadable documents are listed in
    /// [`FrozenResults::skipped`]; under [`MissingDocumentPolicy::Abort`]
    /// the first failure is returned as an error.
    pub fn run(
        &self,
        query: &Query,
        documents: Vec<DocRef>,
        store: &dyn DocumentStore,
        progress: &dyn ProgressSink,
    ) -> Result<FrozenResults, PipelineError> {
        let workers = self.config.workers.get();
        let documents = dedup_references(documents);
        let total = documents.len();

        let queue = WorkQueue::from_references(documents);
        let aggregator = ResultAggregator::with_capacity(total);
        let abort = AtomicBool::new(false);
        let failure: Mutex<Option<crate::error::StoreError>> = Mutex::new(None);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("abstractor-worker-{i}"))
            .build()?;

        tracing::info!(workers, documents = total, "starting worker pool");
        let started = Instant::now();

        pool.scope(|scope| {
            for id in 0..workers {
                let worker = Worker {
                    id: WorkerId(id),
                    query,
                    queue: &queue,
                    aggregator: &aggregator,
                    store,
                    progress,
                    policy: self.config.policy,
                    abort: &abort,
                    failure: &failure,
                };
                scope.spawn(move |_| {
                    worker.run();
                });
            }
        });

        if let Some(err) = failure.into_inner() {
            return Err(PipelineError::DocumentUnavailable(err));
        }

        let results = aggregator.freeze();
        check_results_consistent(&results);

        tracing::info!(
            scored = results.len(),
            skipped = results.skipped().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "worker pool drained"
        );
        Ok(results)
    }
}

/// Drop repeated references, keeping the first. Each document is scored
/// once no matter how often the manifest lists it.
pub fn dedup_references(documents: Vec<DocRef>) -> Vec<DocRef> {
    let mut seen = HashSet::with_capacity(documents.len());
    documents
        .into_iter()
        .filter(|reference| {
            let fresh = seen.insert(reference.clone());
            if !fresh {
                tracing::warn!(reference = %reference, "ignoring duplicate document reference");
            }
            fresh
        })
        .collect()
}
