//! Input selection: which session files a run should process.
//!
//! The sessions directory is flat; selection either takes every file with
//! the session extension or narrows to a UTC calendar day (matched against
//! the file's modification date, or the date string appearing in its
//! name). Results are name-sorted so batches run in a deterministic order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// File extension of session transcripts.
const SESSION_EXTENSION: &str = "jsonl";

/// All session files in the directory.
pub fn all_sessions(sessions_dir: &Path) -> Result<Vec<PathBuf>> {
    collect_sessions(sessions_dir, |path, _| {
        path.extension().is_some_and(|ext| ext == SESSION_EXTENSION)
    })
}

/// Session files for one UTC calendar day: modified on that day, or named
/// after it.
pub fn sessions_for_date(sessions_dir: &Path, date: NaiveDate) -> Result<Vec<PathBuf>> {
    let date_str = date.format("%Y-%m-%d").to_string();
    collect_sessions(sessions_dir, |path, name| {
        name.contains(&date_str) || modified_day(path) == Some(date)
    })
}

/// Yesterday's UTC calendar date.
pub fn yesterday() -> NaiveDate {
    Utc::now().date_naive() - Days::new(1)
}

fn collect_sessions(
    sessions_dir: &Path,
    mut keep: impl FnMut(&Path, &str) -> bool,
) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(sessions_dir)
        .with_context(|| format!("Failed to read sessions directory: {}", sessions_dir.display()))?;

    let mut sessions = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };
        if keep(&path, &name) {
            sessions.push(path);
        }
    }

    sessions.sort();
    Ok(sessions)
}

/// UTC calendar day of a file's last modification, if available.
fn modified_day(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    Some(DateTime::<Utc>::from(modified).date_naive())
}
