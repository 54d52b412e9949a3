//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Workspace for one end-to-end run: a sessions directory and an output
/// directory under a single temp root.
pub struct SessionDirs {
    temp_dir: TempDir,
}

impl SessionDirs {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("sessions")).expect("Failed to create sessions dir");
        fs::create_dir(temp_dir.path().join("out")).expect("Failed to create output dir");
        Self { temp_dir }
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.temp_dir.path().join("sessions")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.temp_dir.path().join("out")
    }

    /// Write a session file from JSONL lines; returns its path.
    pub fn write_session(&self, filename: &str, lines: &[String]) -> PathBuf {
        let path = self.sessions_dir().join(filename);
        fs::write(&path, lines.join("\n")).expect("Failed to write session file");
        path
    }

    pub fn output_file(&self, session_id: &str) -> PathBuf {
        self.output_dir().join(format!("{}_clean.md", session_id))
    }

    pub fn read_output(&self, session_id: &str) -> String {
        fs::read_to_string(self.output_file(session_id)).expect("Failed to read output document")
    }
}

impl Default for SessionDirs {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL line for a user message with plain string content.
pub fn user_line(text: &str, timestamp_ms: i64) -> String {
    format!(
        r#"{{"type":"message","timestamp":{},"message":{{"role":"user","content":{}}}}}"#,
        timestamp_ms,
        serde_json::to_string(text).unwrap()
    )
}

/// JSONL line for an assistant message with plain string content.
pub fn assistant_line(text: &str, timestamp_ms: i64) -> String {
    format!(
        r#"{{"type":"message","timestamp":{},"message":{{"role":"assistant","content":{},"model":"sonnet-4"}}}}"#,
        timestamp_ms,
        serde_json::to_string(text).unwrap()
    )
}

/// JSONL line for an assistant message with array content mixing a text
/// part and a tool call.
pub fn assistant_with_tool_line(text: &str, tool: &str, timestamp_ms: i64) -> String {
    format!(
        r#"{{"type":"message","timestamp":{},"message":{{"role":"assistant","content":[{{"type":"text","text":{}}},{{"type":"toolCall","name":"{}"}}]}}}}"#,
        timestamp_ms,
        serde_json::to_string(text).unwrap(),
        tool
    )
}

/// Run the session-cleaner binary against the given directories.
pub fn cleaner_cmd(dirs: &SessionDirs) -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_session-cleaner"));
    cmd.env("SESSIONS_DIR", dirs.sessions_dir());
    cmd.env("OUTPUT_DIR", dirs.output_dir());
    cmd
}

/// A minimal two-turn session that passes every filter.
pub fn two_turn_session(dirs: &SessionDirs, filename: &str) -> PathBuf {
    dirs.write_session(filename, &[
        user_line("Hello there", 1738228800000),
        assistant_line("Hi! How can I help?", 1738228860000),
    ])
}

/// Assert the document at `path` is still byte-identical to `before`.
pub fn assert_unchanged(path: &Path, before: &str) {
    let after = fs::read_to_string(path).expect("Failed to re-read output");
    assert_eq!(after, before, "output document was modified");
}
