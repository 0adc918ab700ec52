//! Data models for trips.

mod filter;
mod trip;

pub use filter::FilterType;
pub use trip::{Point, Trip, TripError};
