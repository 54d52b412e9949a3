//! Data models for session logs and their extracted narrative.
//!
//! - [`RawEntry`] - one loosely-typed line of a session file
//! - [`MessageContent`] / [`ContentPart`] - the string-or-parts content union
//! - [`SessionMeta`] - metadata accumulated while scanning a session
//! - [`NarrativeItem`] - one ordered item of the reconstructed narrative
//!
//! Raw entries use serde with a lenient timestamp deserializer from the
//! `parsers::deserializers` module; every field degrades to empty/absent
//! instead of failing.

pub mod entry;
pub mod narrative;

pub use entry::{ContentPart, EntryKind, MessageContent, RawEntry, RawMessage, Role};
pub use narrative::{NarrativeItem, SessionMeta};
