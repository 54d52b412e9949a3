use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient timestamp deserializer accepting both integers (Unix epoch
/// milliseconds) and RFC3339 strings.
///
/// Session logs mix producers; a timestamp that is absent, of an unexpected
/// type, or out of range deserializes to `None` instead of failing the
/// record.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Some(Value::String(s)) => s.parse::<DateTime<Utc>>().ok(),
        _ => None,
    };
    Ok(parsed)
}
