// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "progress")]
use abstractor::BarProgress;
use abstractor::{
    dedup_references, process_document, Fanout, FsStore, Manifest, MissingDocumentPolicy,
    Pipeline, PipelineConfig, Query, Report, ReportFormat, ReportProgress, ResultAggregator,
    TracingProgress,
};

mod cli;
use cli::{display, Cli, Commands};

struct RankOptions {
    input: PathBuf,
    output: Option<PathBuf>,
    abstracts: PathBuf,
    threads: Option<NonZeroUsize>,
    limit: Option<usize>,
    format: ReportFormat,
    on_missing: MissingDocumentPolicy,
    progress_log: bool,
}

fn main() {
    // RUST_LOG overrides; per-document events are at debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("abstractor=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Rank {
            input,
            output,
            abstracts,
            threads,
            limit,
            format,
            on_missing,
            no_progress_log,
        } => run_rank(RankOptions {
            input,
            output,
            abstracts,
            threads,
            limit,
            format,
            on_missing,
            progress_log: !no_progress_log,
        }),
        Commands::Score {
            query,
            file,
            format,
        } => run_score(&query, &file, format),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_rank(opts: RankOptions) -> anyhow::Result<()> {
    let manifest = Manifest::from_path(&opts.input)
        .with_context(|| format!("Failed to load manifest {}", opts.input.display()))?;
    let workers = opts.threads.unwrap_or(manifest.workers);
    let limit = opts.limit.unwrap_or(manifest.result_count);
    let store = FsStore::new(&opts.abstracts);
    let config = PipelineConfig::new(workers).with_policy(opts.on_missing);
    let documents = dedup_references(manifest.documents.clone());

    tracing::info!(
        input = %opts.input.display(),
        abstracts = %store.root().display(),
        query = ?manifest.query.terms,
        "ranking abstracts"
    );

    let report_log = ReportProgress::new();
    let tracing_progress = TracingProgress;
    let progress = Fanout::new().with(&tracing_progress);
    let progress = if opts.progress_log {
        progress.with(&report_log)
    } else {
        progress
    };
    #[cfg(feature = "progress")]
    let bar = BarProgress::new(documents.len());
    #[cfg(feature = "progress")]
    let progress = progress.with(&bar);

    let started = Instant::now();
    let results = Pipeline::new(config)
        .run(&manifest.query, documents.clone(), &store, &progress)
        .context("Scoring failed")?;
    let elapsed = started.elapsed();

    #[cfg(feature = "progress")]
    bar.finish(format!("scored {} abstracts", results.len()));
    drop(progress);

    let mut report = Report::new(&manifest.query, &results, limit);
    if opts.progress_log {
        report = report.with_progress(report_log.into_lines());
    }

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            report.write(&mut out, opts.format)?;
            out.flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut out = io::stdout().lock();
            report.write(&mut out, opts.format)?;
        }
    }

    if atty::is(atty::Stream::Stderr) {
        display::print_run_summary(&report, documents.len(), workers.get(), elapsed);
    }

    Ok(())
}

fn run_score(query: &str, file: &Path, format: ReportFormat) -> anyhow::Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let query = Query::parse(query);
    let reference = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let (score, summary) = process_document(&query, &reference, &text);
    let aggregator = ResultAggregator::with_capacity(1);
    aggregator.publish(score, summary);

    let report = Report::new(&query, &aggregator.freeze(), 1);
    report.write(&mut io::stdout().lock(), format)?;
    Ok(())
}
