//! Keep/discard decision for an extracted session.
//!
//! Rules are evaluated in order, first match wins:
//! 1. output already exists (re-running never overwrites)
//! 2. session was started by a denylisted cron job
//! 3. fewer than two conversational turns
//!
//! Cron sessions whose job name is not on the denylist are kept on
//! purpose: the list filters known low-value jobs, everything else
//! (daily-brief, strategic-review, ...) is worth converting.

use std::fmt;
use std::path::Path;

use crate::models::NarrativeItem;

/// Marker a cron-triggered session carries at the start of its first user
/// message, e.g. `[cron: fireflies-sync] ...`.
const CRON_MARKER: &str = "[cron:";

/// Known low-value automated job name fragments. Matched by substring
/// against the first user turn of a cron-triggered session.
const SKIP_CRONS: &[&str] = &[
    "fireflies-sync",
    "crewlink-",
    "collect-activitywatch",
    "collect-screentime",
    "collect-git-stats",
    "gmail-push-check",
    "Check Gmail",
    "activitywatch-collect",
    "sync-sessions",
    "mc-session-sync",
];

/// Minimum number of user/assistant turns for a session to be kept.
const MIN_EXCHANGES: usize = 2;

/// Why a session was skipped rather than converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyProcessed,
    NoiseCron,
    TooFewExchanges(usize),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyProcessed => write!(f, "already exists"),
            SkipReason::NoiseCron => write!(f, "noise cron"),
            SkipReason::TooFewExchanges(count) => write!(f, "too few exchanges: {}", count),
        }
    }
}

/// Decide whether an extracted session should be skipped.
///
/// Returns `None` when the session is worth keeping. The only filesystem
/// effect is the existence check on `output_path`.
pub fn evaluate(narrative: &[NarrativeItem], output_path: &Path) -> Option<SkipReason> {
    if output_path.exists() {
        return Some(SkipReason::AlreadyProcessed);
    }

    if let Some(first_user) = first_user_turn(narrative) {
        if first_user.contains(CRON_MARKER)
            && SKIP_CRONS.iter().any(|skip| first_user.contains(skip))
        {
            return Some(SkipReason::NoiseCron);
        }
    }

    let exchanges = narrative.iter().filter(|item| item.is_exchange()).count();
    if exchanges < MIN_EXCHANGES {
        return Some(SkipReason::TooFewExchanges(exchanges));
    }

    None
}

fn first_user_turn(narrative: &[NarrativeItem]) -> Option<&str> {
    narrative.iter().find_map(|item| match item {
        NarrativeItem::User { content, .. } => Some(content.as_str()),
        _ => None,
    })
}
