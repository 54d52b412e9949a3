use chrono::{DateTime, Utc};

/// Session-level metadata accumulated while scanning entries.
///
/// Populated incrementally by the extractor and frozen once the scan
/// completes: `id` keeps the first non-empty identifier seen, `start_time`
/// the first timestamp, `end_time` the last, and `model` the first model
/// named by a kept assistant message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMeta {
    pub id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub model: Option<String>,
}

/// One item of the reconstructed narrative, in original entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeItem {
    User {
        time: String,
        content: String,
    },
    Assistant {
        time: String,
        content: String,
        model: Option<String>,
    },
    Tool {
        time: String,
        name: String,
        summary: String,
    },
}

impl NarrativeItem {
    /// True for conversational turns (user or assistant); tool markers are
    /// counted for the header but are not exchanges.
    pub fn is_exchange(&self) -> bool {
        matches!(self, NarrativeItem::User { .. } | NarrativeItem::Assistant { .. })
    }
}
