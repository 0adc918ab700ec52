//! Trip and trip point models.
//!
//! Trips arrive as untrusted JSON. String fields are escaped with
//! [`sanitize_json`] before they are deserialized, so a [`Point`]'s text is
//! always safe to interpolate into markup.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::format::{parse_instant, FormatError};
use crate::sanitize::sanitize_json;

#[derive(Debug, Error)]
pub enum TripError {
    #[error("Malformed trip data: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A trip point as it appears in input data.
#[derive(Debug, Clone, Deserialize)]
struct RawPoint {
    destination: String,
    date_from: String,
    date_to: String,
    #[serde(default)]
    base_price: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct RawTrip {
    #[serde(default)]
    points: Vec<RawPoint>,
}

/// A stop on the trip with resolved instants.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Destination name, already HTML-escaped.
    pub destination: String,
    pub date_from: DateTime<FixedOffset>,
    pub date_to: DateTime<FixedOffset>,
    pub base_price: u64,
}

/// An ordered collection of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trip {
    pub points: Vec<Point>,
}

impl Trip {
    /// Build a trip from untrusted JSON of the form `{"points": [...]}`.
    ///
    /// Naive timestamps are placed in `offset` and every instant is expressed
    /// in it. Points are ordered by start.
    pub fn from_json(value: &Value, offset: FixedOffset) -> Result<Self, TripError> {
        let raw: RawTrip = serde_json::from_value(sanitize_json(value))?;

        let mut points = raw
            .points
            .into_iter()
            .map(|point| -> Result<Point, FormatError> {
                Ok(Point {
                    date_from: parse_instant(&point.date_from, offset)?.with_timezone(&offset),
                    date_to: parse_instant(&point.date_to, offset)?.with_timezone(&offset),
                    destination: point.destination,
                    base_price: point.base_price,
                })
            })
            .collect::<Result<Vec<_>, FormatError>>()?;
        points.sort_by_key(|point| point.date_from);

        tracing::debug!("Loaded trip with {} points", points.len());
        Ok(Self { points })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn destinations(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.destination.as_str()).collect()
    }

    /// Sum of all base prices, widened so any number of `u64` prices fits.
    pub fn total_cost(&self) -> i128 {
        self.points.iter().map(|p| i128::from(p.base_price)).sum()
    }

    /// Start of the first point and end of the last one.
    pub fn span(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let start = self.points.iter().map(|p| p.date_from).min()?;
        let end = self.points.iter().map(|p| p.date_to).max()?;
        Some((start, end))
    }
}
