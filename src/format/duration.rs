//! Elapsed-time formatting with unit tiering.

use chrono::{DateTime, Duration, TimeZone};

use super::FormatError;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Format the time elapsed between `from` and `to`.
///
/// Fails with [`FormatError::ReversedRange`] when `to` precedes `from`.
pub fn format_duration<Tz: TimeZone>(
    from: &DateTime<Tz>,
    to: &DateTime<Tz>,
) -> Result<String, FormatError> {
    format_elapsed(to.clone().signed_duration_since(from.clone()))
}

/// Format an elapsed duration, showing units down from the largest non-zero one:
/// `"01d 01h 00m"`, `"01h 30m"` or `"45m"`. Seconds are truncated.
pub fn format_elapsed(elapsed: Duration) -> Result<String, FormatError> {
    if elapsed < Duration::zero() {
        // Sub-second gaps still report at least one second.
        let seconds = (-elapsed).num_seconds().max(1);
        return Err(FormatError::ReversedRange { seconds });
    }

    let total_minutes = elapsed.num_minutes();

    let days = total_minutes / MINUTES_PER_DAY;
    let hours = total_minutes % MINUTES_PER_DAY / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;

    Ok(if days > 0 {
        format!("{:02}d {:02}h {:02}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{:02}h {:02}m", hours, minutes)
    } else {
        format!("{:02}m", minutes)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 5, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_minutes_only() {
        let t = start();
        assert_eq!(format_duration(&t, &t).unwrap(), "00m");
        assert_eq!(format_duration(&t, &(t + Duration::minutes(5))).unwrap(), "05m");
        assert_eq!(format_duration(&t, &(t + Duration::minutes(59))).unwrap(), "59m");
    }

    #[test]
    fn test_hours_tier() {
        let t = start();
        assert_eq!(format_duration(&t, &(t + Duration::minutes(90))).unwrap(), "01h 30m");
        assert_eq!(format_duration(&t, &(t + Duration::hours(23))).unwrap(), "23h 00m");
    }

    #[test]
    fn test_days_tier() {
        let t = start();
        assert_eq!(format_duration(&t, &(t + Duration::hours(25))).unwrap(), "01d 01h 00m");
        assert_eq!(format_duration(&t, &(t + Duration::hours(24))).unwrap(), "01d 00h 00m");
        assert_eq!(
            format_duration(&t, &(t + Duration::days(12) + Duration::minutes(7))).unwrap(),
            "12d 00h 07m"
        );
    }

    #[test]
    fn test_days_are_not_wrapped_at_month_length() {
        let t = start();
        assert_eq!(
            format_duration(&t, &(t + Duration::days(40) + Duration::hours(3))).unwrap(),
            "40d 03h 00m"
        );
        assert_eq!(format_duration(&t, &(t + Duration::days(123))).unwrap(), "123d 00h 00m");
    }

    #[test]
    fn test_seconds_are_truncated() {
        let t = start();
        assert_eq!(format_duration(&t, &(t + Duration::seconds(119))).unwrap(), "01m");
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let t = start();
        let err = format_duration(&(t + Duration::minutes(30)), &t).unwrap_err();
        assert_eq!(err, FormatError::ReversedRange { seconds: 1800 });
    }

    #[test]
    fn test_sub_minute_reversal_reports_seconds() {
        let t = start();
        let err = format_duration(&(t + Duration::seconds(30)), &t).unwrap_err();
        assert_eq!(err, FormatError::ReversedRange { seconds: 30 });
        assert_eq!(err.to_string(), "Range end precedes its start by 30 seconds");

        assert_eq!(
            format_elapsed(-Duration::milliseconds(250)),
            Err(FormatError::ReversedRange { seconds: 1 })
        );
    }
}
