use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now() -> DateTime<Utc> {
    Utc::now()
}


/// Parse an expiration timestamp as sent by the token endpoint or stored in
/// the cache file: RFC 3339, `YYYY-MM-DD HH:MM:SS` (read as UTC) or unix
/// seconds.
pub fn parse_expiration(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT) {
        return Some(Utc.from_utc_datetime(&naive));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Same as [`parse_expiration`] but for a JSON field that may be a string or a number.
pub fn parse_expiration_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_expiration(s),
        Value::Number(n) => n.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)),
        _ => None,
    }
}

pub fn format_expiration(at: &DateTime<Utc>) -> String {
    at.to_rfc3339()
}
