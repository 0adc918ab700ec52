//! tripview - presentation utilities for a trip itinerary UI.
//!
//! HTML fragment composition, recursive sanitization of untrusted data, and
//! the fixed display rules for dates, times, durations, numbers and routes.

// Model types use `from_str` methods that return Option<Self>,
// not Result<Self, Error> as std::str::FromStr requires.
#![allow(clippy::should_implement_trait)]

pub mod config;
pub mod format;
pub mod fragment;
pub mod models;
pub mod sanitize;
pub mod utils;
pub mod views;

pub use format::{
    format_date, format_date_range, format_duration, format_list, format_number, format_time,
};
pub use fragment::{compose, Fragment, FragmentBuilder, Interpolated};
pub use sanitize::{sanitize, Sanitizable};
