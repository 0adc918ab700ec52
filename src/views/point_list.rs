//! Per-point event list.

use chrono::{DateTime, FixedOffset};

use crate::format::{format_date, format_duration, format_number, format_time, FormatError};
use crate::fragment::{Fragment, FragmentBuilder, Interpolated};
use crate::models::{FilterType, Point, Trip};

use super::View;

const DATETIME_ATTRIBUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Display strings for one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointItem {
    pub date: String,
    pub date_attribute: String,
    pub destination: String,
    pub start_time: String,
    pub start_attribute: String,
    pub end_time: String,
    pub end_attribute: String,
    pub duration: String,
    pub price: String,
}

impl PointItem {
    /// Fails when the point ends before it starts.
    pub fn from_point(point: &Point) -> Result<Self, FormatError> {
        Ok(Self {
            date: format_date(&point.date_from, false),
            date_attribute: point.date_from.format("%Y-%m-%d").to_string(),
            destination: point.destination.clone(),
            start_time: format_time(&point.date_from),
            start_attribute: point.date_from.format(DATETIME_ATTRIBUTE_FORMAT).to_string(),
            end_time: format_time(&point.date_to),
            end_attribute: point.date_to.format(DATETIME_ATTRIBUTE_FORMAT).to_string(),
            duration: format_duration(&point.date_from, &point.date_to)?,
            price: format_number(point.base_price),
        })
    }

    fn render(&self) -> Interpolated {
        FragmentBuilder::new()
            .text(r#"
  <li class="trip-events__item">
    <div class="event">
      <time class="event__date" datetime=""#)
            .value(self.date_attribute.as_str())
            .text(r#"">"#)
            .value(self.date.as_str())
            .text(r#"</time>
      <h3 class="event__title">"#)
            .value(self.destination.as_str())
            .text(r#"</h3>
      <div class="event__schedule">
        <p class="event__time">
          <time class="event__start-time" datetime=""#)
            .value(self.start_attribute.as_str())
            .text(r#"">"#)
            .value(self.start_time.as_str())
            .text(r#"</time>
          &mdash;
          <time class="event__end-time" datetime=""#)
            .value(self.end_attribute.as_str())
            .text(r#"">"#)
            .value(self.end_time.as_str())
            .text(r#"</time>
        </p>
        <p class="event__duration">"#)
            .value(self.duration.as_str())
            .text(r#"</p>
      </div>
      <p class="event__price">&euro;&nbsp;<span class="event__price-value">"#)
            .value(self.price.as_str())
            .text("</span></p>\n    </div>\n  </li>")
            .build()
            .into()
    }
}

#[derive(Debug, Clone)]
pub struct PointListView {
    pub filter: FilterType,
    pub items: Vec<PointItem>,
}

impl PointListView {
    /// Points of `trip` passing `filter` at `now`, in trip order.
    pub fn for_trip(
        trip: &Trip,
        filter: FilterType,
        now: &DateTime<FixedOffset>,
    ) -> Result<Self, FormatError> {
        let items = trip
            .points
            .iter()
            .filter(|point| filter.matches(point, now))
            .map(PointItem::from_point)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { filter, items })
    }
}

impl View for PointListView {
    fn create_html(&self) -> Fragment {
        if self.items.is_empty() {
            return Fragment::compose(
                &[r#"<p class="trip-events__msg">"#, "</p>"],
                &[self.filter.empty_message().into()],
            );
        }

        FragmentBuilder::new()
            .text(r#"<ul class="trip-events__list">"#)
            .value(Interpolated::sequence(self.items.iter().map(PointItem::render)))
            .text("\n</ul>")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, day, hour, minute, 0)
            .unwrap()
    }

    fn point(destination: &str, from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> Point {
        Point {
            destination: destination.to_string(),
            date_from: from,
            date_to: to,
            base_price: 1250,
        }
    }

    #[test]
    fn test_item_fields() {
        let item = PointItem::from_point(&point("Geneva", at(5, 10, 0), at(5, 11, 30))).unwrap();
        assert_eq!(item.date, "5 Jun");
        assert_eq!(item.date_attribute, "2024-06-05");
        assert_eq!(item.start_time, "10:00");
        assert_eq!(item.start_attribute, "2024-06-05T10:00");
        assert_eq!(item.end_time, "11:30");
        assert_eq!(item.duration, "01h 30m");
        assert_eq!(item.price, "1,250");
    }

    #[test]
    fn test_reversed_point_fails() {
        let err = PointItem::from_point(&point("Oslo", at(6, 0, 0), at(5, 0, 0))).unwrap_err();
        assert!(matches!(err, FormatError::ReversedRange { .. }));
    }

    #[test]
    fn test_filtered_list() {
        let trip = Trip {
            points: vec![
                point("Past", at(1, 0, 0), at(2, 0, 0)),
                point("Future", at(20, 0, 0), at(21, 1, 0)),
            ],
        };
        let view = PointListView::for_trip(&trip, FilterType::Future, &at(10, 0, 0)).unwrap();
        assert_eq!(view.items.len(), 1);

        let html = view.create_html().into_string();
        assert!(html.starts_with(r#"<ul class="trip-events__list">"#));
        assert_eq!(html.matches(r#"<li class="trip-events__item">"#).count(), 1);
        assert!(html.contains(r#"<h3 class="event__title">Future</h3>"#));
        assert!(html.contains(r#"<p class="event__duration">01d 01h 00m</p>"#));
        assert!(html.contains(r#"datetime="2024-06-20T00:00">00:00</time>"#));
    }

    #[test]
    fn test_empty_list_shows_message() {
        let view = PointListView::for_trip(&Trip::default(), FilterType::Past, &at(10, 0, 0)).unwrap();
        assert_eq!(
            view.create_html().as_str(),
            r#"<p class="trip-events__msg">There are no past events now</p>"#
        );
    }
}
