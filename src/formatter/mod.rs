pub mod markdown;

pub use markdown::{OUTPUT_SUFFIX, SUMMARY_LIMIT, output_path, render_markdown, session_id};
