//! Narrative extraction from parsed session entries.
//!
//! A single forward pass over the entry sequence reconstructs session
//! metadata and a chronological narrative of user turns, assistant turns,
//! and tool markers. Extraction never fails: every missing or malformed
//! sub-field degrades to an empty/absent value.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{
    ContentPart, EntryKind, MessageContent, NarrativeItem, RawEntry, Role, SessionMeta,
};
use crate::utils::format_clock;

/// Maximum rendered length of a user turn, in characters.
pub const USER_TURN_LIMIT: usize = 500;

/// Maximum rendered length of an assistant turn, in characters.
pub const ASSISTANT_TURN_LIMIT: usize = 1000;

/// Marker carried by heartbeat probe messages; user turns containing it
/// anywhere are dropped from the narrative.
const HEARTBEAT_MARKER: &str = "HEARTBEAT";

/// Sentinel replies emitted by the agent when it has nothing to say;
/// assistant turns exactly equal to one of these are dropped.
const SILENT_REPLIES: &[&str] = &["NO_REPLY", "HEARTBEAT_OK"];

/// Leading channel prefix of relayed messages, e.g. `[Telegram from Bob]`.
/// Non-greedy through the closing bracket; the prefix may span newlines.
static CHANNEL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\[(?:Telegram|Discord|Slack|Signal|WhatsApp).*?\]\s*").unwrap()
});

/// Reconstruct session metadata and the ordered narrative from the entry
/// sequence.
///
/// Metadata accumulates while scanning: the first timestamp becomes the
/// start time, every timestamp advances the end time, the first non-empty
/// id becomes the session identifier, and the first kept assistant message
/// naming a model sets the model field. Narrative items keep the exact
/// input order; nothing is re-sorted.
pub fn extract_narrative(entries: &[RawEntry]) -> (SessionMeta, Vec<NarrativeItem>) {
    let mut meta = SessionMeta::default();
    let mut narrative = Vec::new();

    for entry in entries {
        if entry.timestamp.is_some() {
            if meta.start_time.is_none() {
                meta.start_time = entry.timestamp;
            }
            meta.end_time = entry.timestamp;
        }
        if meta.id.is_none() {
            if let Some(id) = &entry.id {
                if !id.is_empty() {
                    meta.id = Some(id.clone());
                }
            }
        }

        if entry.kind() != EntryKind::Message {
            continue;
        }
        let Some(msg) = &entry.message else {
            continue;
        };
        let time = format_clock(entry.timestamp);

        match msg.role() {
            Role::User => {
                let text = display_text(msg.content.as_ref());
                if !text.trim().is_empty() && !text.contains(HEARTBEAT_MARKER) {
                    let clean = strip_channel_prefix(&text);
                    if !clean.is_empty() {
                        narrative.push(NarrativeItem::User {
                            time: time.clone(),
                            content: truncate_chars(clean, USER_TURN_LIMIT),
                        });
                    }
                }
            }
            Role::Assistant => {
                let text = display_text(msg.content.as_ref());
                if !text.trim().is_empty() && !SILENT_REPLIES.contains(&text.as_str()) {
                    if meta.model.is_none() {
                        meta.model = msg.model.clone();
                    }
                    narrative.push(NarrativeItem::Assistant {
                        time: time.clone(),
                        content: truncate_chars(text, ASSISTANT_TURN_LIMIT),
                        model: msg.model.clone(),
                    });
                }
            }
            Role::Other => {}
        }

        // Tool markers come from any message entry with array content,
        // regardless of role, interleaved at the originating entry.
        if let Some(MessageContent::Parts(parts)) = &msg.content {
            for part in parts {
                if let ContentPart::ToolCall { name } = part {
                    narrative.push(NarrativeItem::Tool {
                        time: time.clone(),
                        name: name.clone(),
                        summary: format!("Used {}", name),
                    });
                }
            }
        }
    }

    (meta, narrative)
}

/// Flatten message content to a single display string: plain content is
/// used verbatim, array content keeps only text parts joined by newlines.
fn display_text(content: Option<&MessageContent>) -> String {
    match content {
        Some(MessageContent::Plain(text)) => text.clone(),
        Some(MessageContent::Parts(parts)) => {
            let texts: Vec<&str> = parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            texts.join("\n")
        }
        None => String::new(),
    }
}

/// Strip one leading channel prefix and trim surrounding whitespace.
fn strip_channel_prefix(text: &str) -> String {
    CHANNEL_PREFIX.replace(text, "").trim().to_string()
}

/// Bound `text` to `limit` characters, appending an ellipsis if truncated.
fn truncate_chars(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text;
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push('…');
    truncated
}
