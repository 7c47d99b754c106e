//! Post timestamp formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const DISPLAY: &str = "%Y-%m-%d %H:%M";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Render a server timestamp as `YYYY-MM-DD HH:MM` local time.
///
/// Zoned forms (RFC 3339, RFC 2822) and epochs (10 digits for seconds, 13
/// for milliseconds) are converted to the local zone; zone-less forms are
/// taken as local already. Anything unparseable is shown as received.
pub fn format_timestamp(raw: &str) -> String {
    format_in(raw, &Local)
}

pub(crate) fn format_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw)) {
        return dt.with_timezone(tz).format(DISPLAY).to_string();
    }
    if let Some(dt) = parse_epoch(raw) {
        return dt.with_timezone(tz).format(DISPLAY).to_string();
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.format(DISPLAY).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format!("{} 00:00", date.format("%Y-%m-%d"));
    }
    raw.to_string()
}

fn parse_epoch(raw: &str) -> Option<DateTime<Utc>> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = raw.parse::<i64>().ok()?;
    match raw.len() {
        10 => DateTime::from_timestamp(value, 0),
        13 => DateTime::from_timestamp_millis(value),
        _ => None,
    }
}
