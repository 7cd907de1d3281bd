use std::collections::BTreeMap;
use std::fmt;

use serde_json::Number;

/// A string-keyed mapping of values.
///
/// Backed by a `BTreeMap`, so keys are unique and iterate in ascending
/// lexicographic order.
pub type Mapping = BTreeMap<String, Value>;

/// A dynamically-typed configuration value.
///
/// Arrays are opaque: they take part in equality checks but are never
/// diffed element by element.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Returns the inner mapping if this value is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Returns `true` if this value is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Short name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Mapping(_) => "mapping",
        }
    }
}

/// Inline rendering: strings are written verbatim, arrays as `[a, b]` and
/// mappings as `{k: v}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

/// Non-finite floats have no number representation and become `Null`.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Mapping(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(200i64).to_string(), "200");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from("Value 1").to_string(), "Value 1");
        assert_eq!(Value::from("").to_string(), "");
    }

    #[test]
    fn display_array_inline() {
        let v = Value::from(json!([1, "two", null, [3]]));
        assert_eq!(v.to_string(), "[1, two, null, [3]]");
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
    }

    #[test]
    fn display_mapping_inline_sorted() {
        let v = Value::from(json!({"b": 2, "a": {"c": true}}));
        assert_eq!(v.to_string(), "{a: {c: true}, b: 2}");
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(f64::INFINITY), Value::Null);
    }

    #[test]
    fn from_json_object_is_mapping() {
        let v = Value::from(json!({"host": "hexlet.io", "timeout": 50}));
        let map = v.as_mapping().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["host"], Value::from("hexlet.io"));
        assert_eq!(map["timeout"], Value::from(50i64));
    }

    #[test]
    fn integer_and_float_differ() {
        assert_ne!(Value::from(1i64), Value::from(1.0));
        assert_eq!(Value::from(1i64), Value::from(1u64));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(vec![]).type_name(), "array");
        assert_eq!(Value::from(Mapping::new()).type_name(), "mapping");
        assert!(Value::from(Mapping::new()).is_mapping());
        assert!(!Value::from("x").is_mapping());
    }
}
