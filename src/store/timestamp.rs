use crate::error::PytoriError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Offset-less layouts seen in stored `merged_on` values; read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a stored `merged_on` value into an instant.
///
/// Accepts RFC 3339 with any offset, offset-less date-times (optionally with
/// a trailing `Z`, and with non-padded fields), and bare dates at midnight UTC.
pub fn parse_merged_on(raw: &str) -> Result<DateTime<Utc>, PytoriError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = raw
        .strip_suffix('Z')
        .or_else(|| raw.strip_suffix('z'))
        .unwrap_or(raw);
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    {
        return Ok(dt.and_utc());
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| PytoriError::InvalidRecord(format!("unparsable merged_on {raw:?}")))
}
