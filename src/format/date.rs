//! Calendar date and clock time formatting.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use super::RANGE_SEPARATOR;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format as `"D MMM"` (`"5 Jun"`), or just the day of month when `narrow`.
pub fn format_date<Tz: TimeZone>(value: &DateTime<Tz>, narrow: bool) -> String {
    if narrow {
        value.day().to_string()
    } else {
        format!("{} {}", value.day(), MONTH_ABBREVIATIONS[value.month0() as usize])
    }
}

/// Format the time of day as 24-hour `"HH:mm"`.
pub fn format_time<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}

/// Format a date range, collapsing the parts two dates share.
///
/// - same calendar day: `"5 Jun"`
/// - same calendar month: `"5 — 20 Jun"`
/// - otherwise: `"5 Jun — 20 Jul"`
///
/// `to` is read in the time zone of `from`. A range whose end precedes its
/// start is rendered as given.
pub fn format_date_range<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> String {
    let to = to.with_timezone(&from.timezone());

    if from.date_naive() == to.date_naive() {
        return format_date(from, false);
    }

    let same_month = from.year() == to.year() && from.month() == to.month();
    [format_date(from, same_month), format_date(&to, false)].join(RANGE_SEPARATOR)
}

/// Format as `"dd/mm/yy HH:mm"`, the alternate display used by date inputs.
pub fn format_alt_date_time<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format!(
        "{:02}/{:02}/{:02} {}",
        value.day(),
        value.month(),
        value.year().rem_euclid(100),
        format_time(value)
    )
}
