use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One decoded line of a session file.
///
/// Session logs are append-only and loosely typed: every field here is
/// optional, and a missing or unexpected field degrades to `None` rather
/// than failing the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(rename = "type", default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<RawMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<MessageContent>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Discriminant over the `type` tag of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Message,
    Other,
}

/// Discriminant over a message's `role` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    Other,
}

/// Message content is either a single string or an ordered list of typed
/// parts, depending on the producer.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Plain(String),
    Parts(Vec<ContentPart>),
}

/// One item of array-form message content, tagged by its `type` field.
/// Unrecognized part types collapse into [`ContentPart::Other`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "toolCall")]
    ToolCall {
        #[serde(default)]
        name: String,
    },
    #[serde(other)]
    Other,
}

impl RawEntry {
    pub fn kind(&self) -> EntryKind {
        match self.entry_type.as_deref() {
            Some("message") => EntryKind::Message,
            _ => EntryKind::Other,
        }
    }
}

impl RawMessage {
    pub fn role(&self) -> Role {
        match self.role.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_message() {
        let entry: RawEntry =
            serde_json::from_str(r#"{"type":"message","message":{"role":"user"}}"#).unwrap();
        assert_eq!(entry.kind(), EntryKind::Message);
    }

    #[test]
    fn test_entry_kind_other_for_unknown_tag() {
        let entry: RawEntry = serde_json::from_str(r#"{"type":"session-start"}"#).unwrap();
        assert_eq!(entry.kind(), EntryKind::Other);
    }

    #[test]
    fn test_entry_kind_other_for_missing_tag() {
        let entry: RawEntry = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(entry.kind(), EntryKind::Other);
        assert!(entry.id.is_none());
        assert!(entry.timestamp.is_none());
        assert!(entry.message.is_none());
    }

    #[test]
    fn test_role_mapping() {
        let msg: RawMessage = serde_json::from_str(r#"{"role":"user"}"#).unwrap();
        assert_eq!(msg.role(), Role::User);
        let msg: RawMessage = serde_json::from_str(r#"{"role":"assistant"}"#).unwrap();
        assert_eq!(msg.role(), Role::Assistant);
        let msg: RawMessage = serde_json::from_str(r#"{"role":"tool"}"#).unwrap();
        assert_eq!(msg.role(), Role::Other);
        let msg: RawMessage = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(msg.role(), Role::Other);
    }

    #[test]
    fn test_content_plain_string() {
        let msg: RawMessage =
            serde_json::from_str(r#"{"role":"user","content":"just text"}"#).unwrap();
        assert!(matches!(msg.content, Some(MessageContent::Plain(ref s)) if s == "just text"));
    }

    #[test]
    fn test_content_parts() {
        let msg: RawMessage = serde_json::from_str(
            r#"{"role":"assistant","content":[{"type":"text","text":"hi"},{"type":"toolCall","name":"exec"}]}"#,
        )
        .unwrap();
        match msg.content {
            Some(MessageContent::Parts(parts)) => {
                assert_eq!(parts.len(), 2);
                assert!(matches!(parts[0], ContentPart::Text { ref text } if text == "hi"));
                assert!(matches!(parts[1], ContentPart::ToolCall { ref name } if name == "exec"));
            }
            other => panic!("expected parts content, got {:?}", other),
        }
    }

    #[test]
    fn test_content_part_unknown_type_is_other() {
        let msg: RawMessage = serde_json::from_str(
            r#"{"role":"user","content":[{"type":"image","source":"..."},{"type":"text","text":"caption"}]}"#,
        )
        .unwrap();
        match msg.content {
            Some(MessageContent::Parts(parts)) => {
                assert!(matches!(parts[0], ContentPart::Other));
                assert!(matches!(parts[1], ContentPart::Text { .. }));
            }
            other => panic!("expected parts content, got {:?}", other),
        }
    }

    #[test]
    fn test_content_part_missing_payload_defaults_empty() {
        let msg: RawMessage =
            serde_json::from_str(r#"{"role":"user","content":[{"type":"text"}]}"#).unwrap();
        match msg.content {
            Some(MessageContent::Parts(parts)) => {
                assert!(matches!(parts[0], ContentPart::Text { ref text } if text.is_empty()));
            }
            other => panic!("expected parts content, got {:?}", other),
        }
    }
}
