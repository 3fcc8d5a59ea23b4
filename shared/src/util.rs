//! Value normalisation helpers
//!
//! Remote rows are loosely typed: fields go missing, arrive as `null`, or
//! carry either a full timestamp or a bare date. Everything that smooths this
//! over lives here so the models only need serde attributes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Placeholder rendered for values the store did not provide
pub const MISSING: &str = "—";

/// Deserialize `null` (or a missing field, with `#[serde(default)]`) as `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional string, treating `""` and whitespace as absent
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Parse a store timestamp
///
/// Accepts RFC 3339 (`2025-11-28T14:45:00+00:00`), the space-separated form
/// Postgres emits without a zone (`2025-11-28 14:45:00`), and a bare date
/// (`2025-11-28`, taken as midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// "Nov 28, 2025"; empty string when the value is absent or unparseable
pub fn format_short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// "Fri, Nov 28, 2025"
pub fn format_long_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format("%a, %b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// "02:45 PM"
pub fn format_time(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|ts| ts.format("%I:%M %p").to_string())
        .unwrap_or_default()
}

/// "$12.50", or [`MISSING`] when the amount is absent
pub fn format_money(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) => format!("${:.2}", value.round_dp(2)),
        None => MISSING.to_string(),
    }
}
