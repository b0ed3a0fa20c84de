//! Parsing date/time and duration arguments.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a CLI date/time. RFC 3339 input keeps its offset; anything else is
/// read as local wall-clock time.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .with_context(|| {
            format!("Could not parse date/time: \"{input}\" (expected YYYY-MM-DD HH:MM)")
        })?;

    // A wall-clock time skipped by a DST jump has no mapping
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("\"{input}\" does not exist in the local time zone"))?;

    Ok(local.with_timezone(&Utc))
}

/// Parse a duration like "30m" or "1h 30m".
pub fn parse_duration(input: &str) -> Result<Duration> {
    let std_dur = humantime::parse_duration(input)
        .with_context(|| format!("Could not parse duration: \"{input}\""))?;
    Duration::from_std(std_dur).context("Duration too large")
}

/// Work out the end of a meeting from an explicit end, a duration, or the
/// configured default length.
pub fn resolve_end(
    start: DateTime<Utc>,
    end: Option<&str>,
    duration: Option<&str>,
    default_length: std::time::Duration,
) -> Result<DateTime<Utc>> {
    if let Some(end) = end {
        return parse_datetime(end);
    }

    let length = match duration {
        Some(d) => parse_duration(d)?,
        None => Duration::from_std(default_length).context("Default duration too large")?,
    };

    Ok(start + length)
}

/// Format an instant as local "Fri Mar 20 15:00".
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%a %b %-d %H:%M").to_string()
}

/// Format the local "HH:MM" part of an instant.
pub fn format_time(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M").to_string()
}
