//! Per-file conversion pipeline and the sequential batch loop.
//!
//! # Error Handling Strategy
//!
//! `process_session` is pure of console output and reports everything
//! through its return value: a typed [`Outcome`] for the intentional
//! skips, `Err` for whole-file failures (unreadable input, write errors).
//! The batch loop is solely responsible for counting and printing, and one
//! file's failure never aborts the batch - the failure is logged to stderr
//! and the loop continues.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::filters::{self, SkipReason};
use crate::formatter::{output_path, render_markdown, session_id};
use crate::narrative::extract_narrative;
use crate::parsers::parse_session_file;
use crate::utils::Config;

/// Result of processing one session file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    Skipped(SkipReason),
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Convert one session file: parse, extract, filter, render, write.
///
/// The output location is derived from the source file name; an existing
/// document there short-circuits to [`SkipReason::AlreadyProcessed`], so
/// re-running never overwrites prior output.
pub fn process_session(path: &Path, config: &Config) -> Result<Outcome> {
    let out_path = output_path(&config.output_dir, path);

    let entries = parse_session_file(path)?;
    let (meta, narrative) = extract_narrative(&entries);

    if let Some(reason) = filters::evaluate(&narrative, &out_path) {
        return Ok(Outcome::Skipped(reason));
    }

    let markdown = render_markdown(&narrative, &meta, path);
    fs::write(&out_path, markdown)
        .with_context(|| format!("Failed to write output file: {}", out_path.display()))?;

    Ok(Outcome::Created(out_path))
}

/// Process files strictly sequentially, printing one line per file.
pub fn run_batch(paths: &[PathBuf], config: &Config) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for path in paths {
        match process_session(path, config) {
            Ok(Outcome::Created(out_path)) => {
                println!("✅ Created {}", out_path.display());
                summary.created += 1;
            }
            Ok(Outcome::Skipped(reason)) => {
                println!("⏭️  Skipping {} ({})", session_id(path), reason);
                summary.skipped += 1;
            }
            Err(e) => {
                eprintln!("❌ Error processing {}: {:#}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    summary
}
