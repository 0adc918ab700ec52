//! Trip point filters.

use chrono::{DateTime, FixedOffset};

use super::Point;

/// Which points of a trip are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterType {
    #[default]
    Everything,
    Future,
    Present,
    Past,
}

impl FilterType {
    pub const ALL: [FilterType; 4] = [Self::Everything, Self::Future, Self::Present, Self::Past];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Everything => "everything",
            Self::Future => "future",
            Self::Present => "present",
            Self::Past => "past",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "everything" => Some(Self::Everything),
            "future" => Some(Self::Future),
            "present" => Some(Self::Present),
            "past" => Some(Self::Past),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Everything => "Everything",
            Self::Future => "Future",
            Self::Present => "Present",
            Self::Past => "Past",
        }
    }

    /// Message shown when no point passes this filter.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Everything => "Click New Event to create your first point",
            Self::Future => "There are no future events now",
            Self::Present => "There are no present events now",
            Self::Past => "There are no past events now",
        }
    }

    /// Whether `point` passes this filter at `now`.
    pub fn matches(&self, point: &Point, now: &DateTime<FixedOffset>) -> bool {
        match self {
            Self::Everything => true,
            Self::Future => point.date_from > *now,
            Self::Present => point.date_from <= *now && point.date_to >= *now,
            Self::Past => point.date_to < *now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, day, hour, 0, 0)
            .unwrap()
    }

    fn point(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Point {
        Point {
            destination: "Geneva".to_string(),
            date_from: from,
            date_to: to,
            base_price: 100,
        }
    }

    #[test]
    fn test_round_trip_identifiers() {
        for filter in FilterType::ALL {
            assert_eq!(FilterType::from_str(filter.as_str()), Some(filter));
        }
        assert_eq!(FilterType::from_str("tomorrow"), None);
    }

    #[test]
    fn test_matches() {
        let now = at(10, 12);
        let past = point(at(1, 0), at(2, 0));
        let present = point(at(10, 0), at(11, 0));
        let future = point(at(20, 0), at(21, 0));

        assert!(FilterType::Everything.matches(&past, &now));
        assert!(FilterType::Past.matches(&past, &now));
        assert!(!FilterType::Past.matches(&present, &now));
        assert!(FilterType::Present.matches(&present, &now));
        assert!(!FilterType::Present.matches(&future, &now));
        assert!(FilterType::Future.matches(&future, &now));
        assert!(!FilterType::Future.matches(&present, &now));
    }
}
