//! Display formatting for trip data.
//!
//! Every rule here is fixed: English month abbreviations, comma digit
//! grouping, 24-hour clock. Calendar comparisons use the time zone carried by
//! the instants themselves.

mod date;
mod duration;
mod instant;
mod list;
mod number;

use thiserror::Error;

pub use date::{format_alt_date_time, format_date, format_date_range, format_time};
pub use duration::{format_duration, format_elapsed};
pub use instant::{parse_instant, parse_offset};
pub use list::format_list;
pub use number::{format_number, Number};

/// Separator between the rendered parts of a range or list.
pub const RANGE_SEPARATOR: &str = " — ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid date/time value: {0:?}")]
    InvalidInstant(String),
    #[error("Invalid UTC offset: {0:?}")]
    InvalidOffset(String),
    #[error("Range end precedes its start by {seconds} seconds")]
    ReversedRange { seconds: i64 },
}
