// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Writing ranked results.
//!
//! The text format is the classic one, and existing tooling diffs against
//! it byte for byte:
//!
//! ```text
//! Worker 0 is calculating abstract_2.txt     <- optional progress log
//! ###
//! Result 1:
//! File: abstract_2.txt
//! Score: 0.3333
//! Summary: sentences that mention the query.
//! ###
//! ```
//!
//! Scores always print with four decimals. JSON carries the same data plus
//! the skipped documents.

use std::io::Write;

use serde::Serialize;

use crate::manifest::Query;
use crate::pipeline::FrozenResults;
use crate::scoring::{rank, DocRef, RankedDocument};

/// Block separator in the text format.
pub const SEPARATOR: &str = "###";

/// Output encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Everything the output file needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub query: Vec<String>,
    pub results: Vec<RankedDocument>,
    pub skipped: Vec<DocRef>,
    #[serde(skip)]
    pub progress: Vec<String>,
}

impl Report {
    /// Rank frozen results and keep the top `limit`.
    pub fn new(query: &Query, results: &FrozenResults, limit: usize) -> Self {
        Report {
            query: query.terms.clone(),
            results: rank(results, limit),
            skipped: results.skipped().to_vec(),
            progress: Vec::new(),
        }
    }

    /// Attach progress lines printed ahead of the results in text format.
    pub fn with_progress(mut self, progress: Vec<String>) -> Self {
        self.progress = progress;
        self
    }

    pub fn write<W: Write>(&self, out: &mut W, format: ReportFormat) -> crate::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(out)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in &self.progress {
            writeln!(out, "{}", line)?;
        }
        for result in &self.results {
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "Result {}:", result.rank)?;
            writeln!(out, "File: {}", result.reference)?;
            writeln!(out, "Score: {:.4}", result.score)?;
            writeln!(out, "Summary: {}", result.summary)?;
        }
        writeln!(out, "{}", SEPARATOR)
    }

    /// Render to a string (text or JSON).
    pub fn render(&self, format: ReportFormat) -> crate::Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, format)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
