//! Radio-button filter bar.

use chrono::{DateTime, FixedOffset};

use crate::fragment::{compose, Fragment, FragmentBuilder, Interpolated};
use crate::models::{FilterType, Trip};

use super::View;

/// Render state of one filter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterItem {
    pub value: FilterType,
    pub is_selected: bool,
    pub is_disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FilterView {
    pub items: Vec<FilterItem>,
}

impl FilterView {
    /// One item per filter type. A filter no point of `trip` passes at `now`
    /// is disabled, as is any filter listed in `disabled`.
    pub fn for_trip(
        trip: &Trip,
        selected: FilterType,
        disabled: &[FilterType],
        now: &DateTime<FixedOffset>,
    ) -> Self {
        let items = FilterType::ALL
            .into_iter()
            .map(|value| FilterItem {
                value,
                is_selected: value == selected,
                is_disabled: disabled.contains(&value)
                    || !trip.points.iter().any(|point| value.matches(point, now)),
            })
            .collect();
        Self { items }
    }

    fn render_item(item: &FilterItem) -> Interpolated {
        let id = format!("filter-{}", item.value.as_str());
        compose(
            &[
                r#"
        <div class="trip-filters__filter">
          <input
            id=""#,
                r#""
            class="trip-filters__filter-input  visually-hidden"
            type="radio"
            name="trip-filter"
            value=""#,
                r#"""#,
                "",
                r#">
          <label
            class="trip-filters__filter-label"
            for=""#,
                r#"">
            "#,
                r#"
          </label>
        </div>
      "#,
            ],
            &[
                id.as_str().into(),
                item.value.as_str().into(),
                item.is_selected.then_some(" checked").into(),
                item.is_disabled.then_some(" disabled").into(),
                id.into(),
                item.value.label().into(),
            ],
        )
        .into()
    }
}

impl View for FilterView {
    fn create_html(&self) -> Fragment {
        FragmentBuilder::new()
            .text(r##"<form class="trip-filters" action="#" method="get">"##)
            .value(Interpolated::sequence(self.items.iter().map(Self::render_item)))
            .text("</form>")
            .build()
    }
}
