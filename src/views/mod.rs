//! Markup views built from trip state.
//!
//! Each view owns the state it renders and produces a [`Fragment`]. Text held
//! in view state must already be escaped; views interpolate it verbatim.

mod filter;
mod point_list;
mod trip_info;

use crate::fragment::Fragment;

pub use filter::{FilterItem, FilterView};
pub use point_list::{PointItem, PointListView};
pub use trip_info::TripInfoView;

/// Something that renders to markup.
pub trait View {
    fn create_html(&self) -> Fragment;
}
