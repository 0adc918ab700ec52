//! HTML fragment composition.
//!
//! A template is a list of literal segments with one interpolation slot between
//! each neighbouring pair. Values are inserted verbatim: nothing here escapes,
//! so anything derived from user input must go through [`crate::sanitize`] or
//! [`crate::utils::html_escape`] first.

use std::fmt;

/// A value substituted into a template slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolated {
    /// Renders as nothing.
    Absent,
    /// Already converted to its display form.
    Scalar(String),
    /// Flattened without a separator.
    Sequence(Vec<Interpolated>),
}

impl Interpolated {
    fn write_to(&self, out: &mut String) {
        match self {
            Self::Absent => {}
            Self::Scalar(s) => out.push_str(s),
            Self::Sequence(items) => {
                for item in items {
                    item.write_to(out);
                }
            }
        }
    }

    /// Collect any iterator of convertible values into a sequence.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Interpolated>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Interpolated {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Interpolated {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for Interpolated {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<Fragment> for Interpolated {
    fn from(value: Fragment) -> Self {
        Self::Scalar(value.0)
    }
}

macro_rules! interpolate_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Interpolated {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

interpolate_display!(i32, i64, u32, u64, usize, bool, char);

/// Floats render the way a browser prints them: `Infinity`, `NaN`, `0` for
/// negative zero, and exponent notation outside `1e-6..1e21`.
impl From<f64> for Interpolated {
    fn from(value: f64) -> Self {
        Self::Scalar(display_float(value))
    }
}

fn display_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}

impl<T: Into<Interpolated>> From<Option<T>> for Interpolated {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Interpolated>> From<Vec<T>> for Interpolated {
    fn from(value: Vec<T>) -> Self {
        Self::sequence(value)
    }
}

impl<T: Into<Interpolated>, const N: usize> From<[T; N]> for Interpolated {
    fn from(value: [T; N]) -> Self {
        Self::sequence(value)
    }
}

/// Composed markup.
///
/// Wrapping the output keeps composed markup distinguishable from plain text,
/// and lets a fragment be nested into another template as a slot value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// [`compose`] with the result marked as markup.
    pub fn compose<S: AsRef<str>>(segments: &[S], values: &[Interpolated]) -> Self {
        Self(compose(segments, values))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Fragment> for String {
    fn from(value: Fragment) -> Self {
        value.0
    }
}

/// Compose a template from its literal `segments` and slot `values`.
///
/// `values` should hold exactly `segments.len() - 1` entries. Missing values
/// render as absent and surplus values are dropped.
pub fn compose<S: AsRef<str>>(segments: &[S], values: &[Interpolated]) -> String {
    let slots = segments.len().saturating_sub(1);
    if values.len() != slots {
        tracing::debug!(
            "Template has {} slots but {} values were supplied",
            slots,
            values.len()
        );
    }

    let mut out = String::new();
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            if let Some(value) = values.get(index - 1) {
                value.write_to(&mut out);
            }
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Incremental alternative to [`compose`] that accumulates literal/value pairs.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    out: String,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal segment.
    pub fn text(mut self, literal: &str) -> Self {
        self.out.push_str(literal);
        self
    }

    /// Append a slot value.
    pub fn value(mut self, value: impl Into<Interpolated>) -> Self {
        value.into().write_to(&mut self.out);
        self
    }

    pub fn build(self) -> Fragment {
        Fragment(self.out)
    }
}
