use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};

use crate::converter::{all_sessions, run_batch, sessions_for_date, yesterday};
use crate::utils::Config;

#[derive(Parser)]
#[command(name = "session-cleaner")]
#[command(version = "0.1.0")]
#[command(about = "Convert session JSONL logs to readable markdown", long_about = None)]
#[command(group = ArgGroup::new("selection").args(["file", "all", "yesterday", "date"]))]
pub struct Cli {
    /// Path to a single session file to convert
    pub file: Option<PathBuf>,

    /// Process all session files in the sessions directory
    #[arg(long)]
    pub all: bool,

    /// Process sessions from yesterday (UTC)
    #[arg(long)]
    pub yesterday: bool,

    /// Process sessions from a specific date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let sessions: Vec<PathBuf> = if cli.all {
        all_sessions(&config.sessions_dir)?
    } else if cli.yesterday {
        sessions_for_date(&config.sessions_dir, yesterday())?
    } else if let Some(date) = cli.date {
        sessions_for_date(&config.sessions_dir, date)?
    } else if let Some(file) = &cli.file {
        vec![file.clone()]
    } else {
        println!("Use --help for usage information");
        return Ok(());
    };

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", config.output_dir.display())
    })?;

    println!("\n📁 Processing {} session(s)...\n", sessions.len());

    let summary = run_batch(&sessions, &config);

    // Per-file failures were already logged; the batch still exits zero.
    println!(
        "\n✅ Done! Created {} clean markdown files in {}\n",
        summary.created,
        config.output_dir.display()
    );

    Ok(())
}
