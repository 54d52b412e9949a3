//! Session Cleaner - Convert session JSONL logs to readable markdown
//!
//! This library turns append-only session transcripts (one JSON record per
//! line, a conversation between an operator and an automated agent) into
//! clean markdown documents. The pipeline has four stages:
//!
//! - Parsing newline-delimited records with best-effort decoding
//! - Extracting session metadata and a chronological narrative
//! - Filtering out noise (cron chatter, near-empty sessions, duplicates)
//! - Rendering and writing one document per kept session
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use session_cleaner::converter::process_session;
//! use session_cleaner::utils::Config;
//!
//! let config = Config::from_env()?;
//! let outcome = process_session(Path::new("0199ab4f-3c21.jsonl"), &config)?;
//! println!("{:?}", outcome);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod converter;
pub mod filters;
pub mod formatter;
pub mod models;
pub mod narrative;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use converter::{Outcome, process_session, run_batch};
pub use filters::SkipReason;
pub use formatter::render_markdown;
pub use narrative::extract_narrative;
pub use parsers::parse_session_file;
pub use utils::Config;
