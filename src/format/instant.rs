//! Parsing textual instants at the boundary where they enter the formatter.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use super::FormatError;

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an instant.
///
/// Accepts RFC 3339 (`2024-06-05T10:00:00+02:00`), or a naive
/// `YYYY-MM-DD[THH:MM[:SS]]` value which is placed in `offset`.
pub fn parse_instant(text: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>, FormatError> {
    let text = text.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed);
    }

    let naive = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| FormatError::InvalidInstant(text.to_string()))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| FormatError::InvalidInstant(text.to_string()))
}

/// Parse a UTC offset such as `Z`, `UTC`, `+02:00`, `-0530` or `+2`.
pub fn parse_offset(text: &str) -> Result<FixedOffset, FormatError> {
    let text = text.trim();
    let invalid = || FormatError::InvalidOffset(text.to_string());

    if text.eq_ignore_ascii_case("z") || text.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => return Err(invalid()),
    };
    if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return Err(invalid());
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
