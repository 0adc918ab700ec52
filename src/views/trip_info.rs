//! Trip summary header: route, dates and total cost.

use crate::format::{format_date_range, format_list, format_number};
use crate::fragment::Fragment;
use crate::models::Trip;

use super::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripInfoView {
    pub title: String,
    pub dates: String,
    pub cost: String,
}

impl TripInfoView {
    /// Summarize `trip`, or `None` when it has no points.
    pub fn for_trip(trip: &Trip) -> Option<Self> {
        let (start, end) = trip.span()?;
        Some(Self {
            title: format_list(&trip.destinations()),
            dates: format_date_range(&start, &end),
            cost: format_number(trip.total_cost()),
        })
    }
}

impl View for TripInfoView {
    fn create_html(&self) -> Fragment {
        Fragment::compose(
            &[
                r#"<section class="trip-main__trip-info  trip-info">
  <div class="trip-info__main">
    <h1 class="trip-info__title">"#,
                r#"</h1>
    <p class="trip-info__dates">"#,
                r#"</p>
  </div>
  <p class="trip-info__cost">
    Total: &euro;&nbsp;<span class="trip-info__cost-value">"#,
                r#"</span>
  </p>
</section>"#,
            ],
            &[
                self.title.as_str().into(),
                self.dates.as_str().into(),
                self.cost.as_str().into(),
            ],
        )
    }
}
