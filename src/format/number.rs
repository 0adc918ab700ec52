//! Thousands-grouped number formatting.

/// Fraction digits kept for non-integral values.
const MAX_FRACTION_DIGITS: usize = 3;

/// A displayable number.
///
/// Integers are kept apart from floats so large values never go through a
/// lossy float conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

macro_rules! number_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self::Int(value as i128)
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Format with English digit grouping: `1234` → `"1,234"`,
/// `1234.5678` → `"1,234.568"`.
pub fn format_number(value: impl Into<Number>) -> String {
    match value.into() {
        Number::Int(n) => {
            let sign = if n < 0 { "-" } else { "" };
            format!("{}{}", sign, group_digits(&n.unsigned_abs().to_string()))
        }
        Number::Float(f) => format_float(f),
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = format!("{}{}", sign, group_digits(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let bytes: Vec<_> = digits.bytes().rev().collect();
    let chunks: Vec<_> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect::<String>())
        .collect();
    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}
