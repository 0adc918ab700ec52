//! Shared helper functions for CLI commands.

use std::io::Read;

use chrono::{DateTime, FixedOffset};

use tripview::config::DisplayConfig;
use tripview::format::{parse_instant, Number};
use tripview::models::{FilterType, Trip};
use tripview::views::{FilterView, PointListView, TripInfoView, View};

/// Parse an instant and express it in `offset`.
pub fn local_instant(text: &str, offset: FixedOffset) -> anyhow::Result<DateTime<FixedOffset>> {
    Ok(parse_instant(text, offset)?.with_timezone(&offset))
}

pub fn parse_filter(name: &str) -> anyhow::Result<FilterType> {
    FilterType::from_str(name).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown filter {:?} (expected everything, future, present or past)",
            name
        )
    })
}

/// Parse a number, keeping integers exact and falling back to a float.
pub fn parse_number(value: &str) -> anyhow::Result<Number> {
    if let Ok(n) = value.parse::<i128>() {
        return Ok(Number::Int(n));
    }
    value
        .parse::<f64>()
        .map(Number::Float)
        .map_err(|_| anyhow::anyhow!("Not a number: {:?}", value))
}

/// Render the summary, filter form and point list for `trip`, one per line.
/// The summary is left out for a trip without points.
pub fn render_trip(
    config: &DisplayConfig,
    trip: &Trip,
    filter: FilterType,
    now: &DateTime<FixedOffset>,
) -> anyhow::Result<String> {
    let disabled = config.disabled_filters()?;
    let mut sections = Vec::new();
    if let Some(info) = TripInfoView::for_trip(trip) {
        sections.push(info.create_html().into_string());
    }
    sections.push(FilterView::for_trip(trip, filter, &disabled, now).create_html().into_string());
    sections.push(PointListView::for_trip(trip, filter, now)?.create_html().into_string());
    Ok(sections.join("\n"))
}

/// Read a file, or stdin when `source` is "-".
pub fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", source, e))
    }
}
