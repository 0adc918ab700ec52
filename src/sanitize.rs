//! Recursive escaping of structured data before it is embedded in markup.
//!
//! External data is converted once into [`Sanitizable`], a closed set of
//! value categories, and [`sanitize`] walks that tree. Only string leaves are
//! touched. Mapping keys are treated as trusted identifiers and pass through
//! unescaped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::utils::html_escape;

/// Non-container leaf. Never rewritten by [`sanitize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(Number),
    Bool(bool),
    Null,
    /// A value that was never set. Serializes as `null`.
    Undefined,
}

/// Data subject to HTML escaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Sanitizable {
    Text(String),
    Sequence(Vec<Sanitizable>),
    Mapping(BTreeMap<String, Sanitizable>),
    Scalar(Scalar),
}

impl Sanitizable {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a mapping entry.
    pub fn get(&self, key: &str) -> Option<&Sanitizable> {
        match self {
            Self::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Whether `other` has the same container structure, ignoring leaf content.
    pub fn same_shape(&self, other: &Sanitizable) -> bool {
        match (self, other) {
            (Self::Text(_), Self::Text(_)) => true,
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            (Self::Mapping(a), Self::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.same_shape(y)))
            }
            _ => false,
        }
    }
}

impl From<&str> for Sanitizable {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Sanitizable {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for Sanitizable {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Null => Self::Scalar(Scalar::Null),
        }
    }
}

impl From<Sanitizable> for Value {
    fn from(value: Sanitizable) -> Self {
        match value {
            Sanitizable::Text(s) => Value::String(s),
            Sanitizable::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Sanitizable::Mapping(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map<String, Value>>(),
            ),
            Sanitizable::Scalar(Scalar::Number(n)) => Value::Number(n),
            Sanitizable::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Sanitizable::Scalar(Scalar::Null | Scalar::Undefined) => Value::Null,
        }
    }
}

/// Escape every string leaf of `value`, preserving its shape.
pub fn sanitize(value: &Sanitizable) -> Sanitizable {
    match value {
        Sanitizable::Text(s) => Sanitizable::Text(html_escape(s)),
        Sanitizable::Sequence(items) => Sanitizable::Sequence(items.iter().map(sanitize).collect()),
        Sanitizable::Mapping(map) => Sanitizable::Mapping(
            map.iter()
                .map(|(key, value)| (key.clone(), sanitize(value)))
                .collect(),
        ),
        Sanitizable::Scalar(scalar) => Sanitizable::Scalar(scalar.clone()),
    }
}

/// Sanitize a JSON document, converting at the boundary.
pub fn sanitize_json(value: &Value) -> Value {
    sanitize(&Sanitizable::from(value.clone())).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sanitize_string() {
        let out = sanitize(&"<b>hi & bye</b>".into());
        assert_eq!(out.as_text(), Some("&lt;b&gt;hi &amp; bye&lt;/b&gt;"));
    }

    #[test]
    fn test_scalars_pass_through() {
        for value in [json!(42), json!(-1.25), json!(true), json!(null)] {
            let input = Sanitizable::from(value);
            assert_eq!(sanitize(&input), input);
        }
        let undefined = Sanitizable::Scalar(Scalar::Undefined);
        assert_eq!(sanitize(&undefined), undefined);
    }

    #[test]
    fn test_shape_is_preserved() {
        let input = Sanitizable::from(json!({
            "title": "<i>Paris</i>",
            "stops": ["Lyon & Nice", 3, {"note": "\"quoted\""}],
            "price": 1200,
            "booked": false,
            "extra": null
        }));
        let out = sanitize(&input);
        assert!(out.same_shape(&input));
        assert_eq!(
            Value::from(out),
            json!({
                "title": "&lt;i&gt;Paris&lt;/i&gt;",
                "stops": ["Lyon &amp; Nice", 3, {"note": "&quot;quoted&quot;"}],
                "price": 1200,
                "booked": false,
                "extra": null
            })
        );
    }

    #[test]
    fn test_mapping_keys_are_not_escaped() {
        let out = sanitize_json(&json!({"<key>": "<value>"}));
        assert_eq!(out, json!({"<key>": "&lt;value&gt;"}));
    }

    #[test]
    fn test_double_sanitize_escapes_again() {
        let once = sanitize(&"a & b".into());
        let twice = sanitize(&once);
        assert_eq!(twice.as_text(), Some("a &amp;amp; b"));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(sanitize_json(&json!([])), json!([]));
        assert_eq!(sanitize_json(&json!({})), json!({}));
    }

    #[test]
    fn test_serde_round_trip_through_value() {
        let parsed: Sanitizable = serde_json::from_str(r#"{"a": ["<x>", 1]}"#).unwrap();
        let text = serde_json::to_string(&sanitize(&parsed)).unwrap();
        assert_eq!(text, r#"{"a":["&lt;x&gt;",1]}"#);
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        let value = Sanitizable::Sequence(vec![Sanitizable::Scalar(Scalar::Undefined)]);
        assert_eq!(Value::from(value), json!([null]));
    }
}
