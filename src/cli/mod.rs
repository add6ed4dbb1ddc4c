// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the abstractor command-line interface.
//!
//! `rank` runs the full pipeline over an input manifest; `score` runs the
//! per-document computation on one file, which is handy when a summary
//! looks wrong and the pool is just noise.

pub mod display;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use abstractor::{MissingDocumentPolicy, ReportFormat, DEFAULT_ABSTRACTS_DIR};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "abstractor",
    about = "Rank abstracts against a query by Jaccard similarity and summarize them",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the abstracts listed in an input manifest
    Rank {
        /// Input manifest: `T A N`, the query line, then one abstract per line
        input: PathBuf,

        /// Report destination (stdout when omitted)
        output: Option<PathBuf>,

        /// Directory the abstract references are resolved against
        #[arg(short, long, default_value = DEFAULT_ABSTRACTS_DIR)]
        abstracts: PathBuf,

        /// Worker count, overriding the manifest header
        #[arg(short, long)]
        threads: Option<NonZeroUsize>,

        /// Number of results to report, overriding the manifest header
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Report encoding
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// What to do with abstracts that cannot be read
        #[arg(long, value_enum, default_value_t = MissingDocumentPolicy::Skip)]
        on_missing: MissingDocumentPolicy,

        /// Leave the per-abstract "is calculating" lines out of the text report
        #[arg(long)]
        no_progress_log: bool,
    },

    /// Score and summarize a single document against a query
    Score {
        /// Query terms, whitespace separated
        query: String,

        /// Document to score
        file: PathBuf,

        /// Report encoding
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}
