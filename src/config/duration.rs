//! `reload_interval` accepts either a number of seconds or a duration string
//! such as `"90s"`, `"1h30m"` or `"250ms"`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::time::Duration;

static DURATION_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+(?:ms|h|m|s))+$").unwrap());
static DURATION_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)(ms|h|m|s)").unwrap());

pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Duration::ZERO);
    }
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| format!("invalid duration {:?}: {}", value, e));
    }
    if !DURATION_FORMAT.is_match(value) {
        return Err(format!(
            "invalid duration {:?}: expected e.g. \"30s\", \"5m\", \"1h30m\" or \"500ms\"",
            value
        ));
    }
    let mut total = Duration::ZERO;
    for part in DURATION_PART.captures_iter(value) {
        let amount: u64 = part[1]
            .parse()
            .map_err(|e| format!("invalid duration {:?}: {}", value, e))?;
        let step = match &part[2] {
            "ms" => Duration::from_millis(amount),
            "s" => Duration::from_secs(amount),
            "m" => amount.checked_mul(60).map(Duration::from_secs).ok_or_else(|| overflow(value))?,
            _ => amount.checked_mul(3600).map(Duration::from_secs).ok_or_else(|| overflow(value))?,
        };
        total = total.checked_add(step).ok_or_else(|| overflow(value))?;
    }
    Ok(total)
}

fn overflow(value: &str) -> String {
    format!("invalid duration {:?}: too large", value)
}

/// Renders whole seconds as `"<n>s"` and anything finer as `"<n>ms"`.
pub fn format_duration(duration: &Duration) -> String {
    if duration.subsec_millis() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(duration))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DurationVisitor)
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number of seconds or a duration string like \"30s\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Duration, E> {
        Ok(Duration::from_secs(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Duration, E> {
        u64::try_from(value)
            .map(Duration::from_secs)
            .map_err(|_| E::custom(format!("reload_interval must not be negative, got {}", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Duration, E> {
        parse_duration(value).map_err(E::custom)
    }
}
