use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::RawEntry;

/// Parse a session JSONL file into its ordered entry sequence.
///
/// Best-effort: blank and whitespace-only lines are skipped, and a line
/// that fails to decode is dropped silently. No entry is reordered or
/// deduplicated. The only error surfaced is failing to open or read the
/// file itself.
pub fn parse_session_file(path: &Path) -> Result<Vec<RawEntry>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line
            .with_context(|| format!("Failed to read line from session file: {}", path.display()))?;

        if line.trim().is_empty() {
            continue;
        }

        if let Ok(entry) = serde_json::from_str::<RawEntry>(&line) {
            entries.push(entry);
        }
    }

    Ok(entries)
}
