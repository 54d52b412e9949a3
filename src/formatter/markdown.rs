//! Markdown rendering of an extracted session.
//!
//! Everything here is total and side-effect-free; the converter is
//! responsible for persisting the result.

use std::path::{Path, PathBuf};

use crate::models::{NarrativeItem, SessionMeta};
use crate::utils::{format_clock, format_day};

/// Maximum rendered length of the summary line, in characters.
pub const SUMMARY_LIMIT: usize = 200;

/// Suffix of generated documents, appended to the 8-char session id.
pub const OUTPUT_SUFFIX: &str = "_clean.md";

/// Derive the displayed session id from a source file name: the `.jsonl`
/// extension and a `.deleted` marker are removed, then the first 8
/// characters are kept.
pub fn session_id(source: &Path) -> String {
    let name = source.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    name.replacen(".jsonl", "", 1).replacen(".deleted", "", 1).chars().take(8).collect()
}

/// Output location for a source file: `<output_dir>/<id>_clean.md`.
pub fn output_path(output_dir: &Path, source: &Path) -> PathBuf {
    output_dir.join(format!("{}{}", session_id(source), OUTPUT_SUFFIX))
}

/// Render the narrative and metadata into the output document.
///
/// Header, one-line summary, the ordered user/assistant exchange, and a
/// footer naming the source file. Tool markers feed the header's tool list
/// but are not rendered in the body.
pub fn render_markdown(narrative: &[NarrativeItem], meta: &SessionMeta, source: &Path) -> String {
    let date = format_day(meta.start_time);
    let start = format_clock(meta.start_time);
    let end = format_clock(meta.end_time);

    let tools = distinct_tools(narrative);
    let tools_display = if tools.is_empty() { "none".to_string() } else { tools.join(", ") };

    let summary = narrative
        .iter()
        .find_map(|item| match item {
            NarrativeItem::User { content, .. } => Some(truncate_chars(content, SUMMARY_LIMIT)),
            _ => None,
        })
        .unwrap_or_else(|| "No user messages".to_string());

    let source_name =
        source.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();

    let mut md = format!(
        "# Session {}\n\n\
         **Date:** {}  \n\
         **Time:** {} - {} UTC  \n\
         **Model:** {}  \n\
         **Tools used:** {}\n\n\
         ---\n\n\
         ## Summary\n\
         {}\n\n\
         ---\n\n\
         ## Conversation\n\n",
        session_id(source),
        date,
        start,
        end,
        meta.model.as_deref().unwrap_or("unknown"),
        tools_display,
        summary,
    );

    for item in narrative {
        match item {
            NarrativeItem::User { time, content } => {
                md.push_str(&format!("### 👤 User ({})\n{}\n\n", time, content));
            }
            NarrativeItem::Assistant { time, content, .. } => {
                md.push_str(&format!("### 🤖 Assistant ({})\n{}\n\n", time, content));
            }
            NarrativeItem::Tool { .. } => {}
        }
    }

    md.push_str(&format!("---\n*Generated by session-cleaner from {}*\n", source_name));
    md
}

/// Distinct tool names across all tool markers, first-seen order.
fn distinct_tools(narrative: &[NarrativeItem]) -> Vec<&str> {
    let mut tools: Vec<&str> = Vec::new();
    for item in narrative {
        if let NarrativeItem::Tool { name, .. } = item {
            if !tools.contains(&name.as_str()) {
                tools.push(name);
            }
        }
    }
    tools
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push('…');
    truncated
}
