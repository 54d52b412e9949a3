use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the sessions (input) directory.
pub const SESSIONS_DIR_ENV: &str = "SESSIONS_DIR";

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "OUTPUT_DIR";

/// Resolved directory configuration, constructed once at startup and passed
/// by reference into selection and the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub sessions_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    /// Resolve both directories from the environment, falling back to the
    /// fixed defaults: `~/.clawdbot/agents/main/sessions` for input and
    /// `memory/sessions` under the working directory for output.
    pub fn from_env() -> Result<Self> {
        let sessions_dir = match env::var(SESSIONS_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::home_dir()
                .context("Could not find home directory")?
                .join(".clawdbot/agents/main/sessions"),
        };

        let output_dir = match env::var(OUTPUT_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from("memory/sessions"),
        };

        Ok(Self { sessions_dir, output_dir })
    }
}
