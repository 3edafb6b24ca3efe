//! Get-or-default accessors over untyped API payloads.
//!
//! Every normalizer reads the upstream JSON through these helpers so that a
//! missing key, a `null` or a value of the wrong type degrades to a default
//! instead of an error.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// Stand-in for a missing sub-object
pub static NULL: Value = Value::Null;

/// Follows a path of object keys. A segment that parses as an index steps
/// into an array.
///
/// # Example
/// ```
/// use serde_json::json;
/// use sports_gateway::data_fetcher::processors::json_path;
///
/// let raw = json!({"competitions": [{"venue": {"fullName": "Fenway Park"}}]});
/// let venue = json_path(&raw, &["competitions", "0", "venue", "fullName"]);
/// assert_eq!(venue, Some(&json!("Fenway Park")));
/// ```
pub fn json_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// String at `path`, or `None` when absent, null or not a string.
/// Numbers are rendered as text since ids and scores arrive either way.
pub fn json_opt_str(value: &Value, path: &[&str]) -> Option<String> {
    match json_path(value, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-empty string at `path`
pub fn json_non_empty(value: &Value, path: &[&str]) -> Option<String> {
    json_opt_str(value, path).filter(|s| !s.is_empty())
}

pub fn json_str(value: &Value, path: &[&str]) -> String {
    json_opt_str(value, path).unwrap_or_default()
}

/// String at `path`, or `default` when missing or empty.
pub fn json_str_or(value: &Value, path: &[&str], default: &str) -> String {
    json_non_empty(value, path).unwrap_or_else(|| default.to_string())
}

/// Unsigned integer from a number or a numeric string
pub fn json_opt_u32(value: &Value, path: &[&str]) -> Option<u32> {
    match json_path(value, path)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

pub fn json_u32(value: &Value, path: &[&str]) -> u32 {
    json_opt_u32(value, path).unwrap_or(0)
}

pub fn json_opt_f64(value: &Value, path: &[&str]) -> Option<f64> {
    match json_path(value, path)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub fn json_f64(value: &Value, path: &[&str]) -> f64 {
    json_opt_f64(value, path).unwrap_or(0.0)
}

pub fn json_bool(value: &Value, path: &[&str]) -> bool {
    json_path(value, path)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Array at `path`, or an empty slice
pub fn json_array<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    json_path(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Timestamp at `path`. Accepts RFC 3339 and the minute-precision
/// `2024-04-01T17:05Z` form the scoreboard uses.
pub fn json_datetime(value: &Value, path: &[&str]) -> Option<DateTime<Utc>> {
    let raw = json_non_empty(value, path)?;
    parse_api_datetime(&raw)
}

pub fn parse_api_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| naive.and_utc())
}
