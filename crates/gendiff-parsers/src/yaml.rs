//! Conversion from `serde_yaml` values into gendiff values.

use gendiff_types::{Mapping, Value};
use serde_yaml::Value as Yaml;

use crate::error::{ParseError, ParseResult};

/// Convert a decoded YAML value into a [`Value`].
///
/// Tagged values are unwrapped. Scalar mapping keys are stringified; sequence
/// and mapping keys are rejected, as are keys whose string forms collide.
pub fn convert(value: Yaml) -> ParseResult<Value> {
    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => convert_number(&n)?,
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(convert)
                .collect::<ParseResult<Vec<_>>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut out = Mapping::new();
            for (key, value) in map {
                let key = convert_key(key)?;
                if out.contains_key(&key) {
                    return Err(ParseError::DuplicateKey(key));
                }
                let value = convert(value)?;
                out.insert(key, value);
            }
            Value::Mapping(out)
        }
        Yaml::Tagged(tagged) => convert(tagged.value)?,
    })
}

fn convert_number(n: &serde_yaml::Number) -> ParseResult<Value> {
    if let Some(i) = n.as_i64() {
        Ok(Value::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::from(u))
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| ParseError::NonFiniteNumber(n.to_string()))
    }
}

fn convert_key(key: Yaml) -> ParseResult<String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Null => Ok("null".to_owned()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Tagged(tagged) => convert_key(tagged.value),
        Yaml::Sequence(_) => Err(ParseError::UnsupportedKey("sequence".to_owned())),
        Yaml::Mapping(_) => Err(ParseError::UnsupportedKey("mapping".to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Yaml {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn scalars_convert() {
        assert_eq!(convert(yaml("~")).unwrap(), Value::Null);
        assert_eq!(convert(yaml("true")).unwrap(), Value::Bool(true));
        assert_eq!(convert(yaml("45")).unwrap(), Value::from(45i64));
        assert_eq!(convert(yaml("1.5")).unwrap(), Value::from(1.5));
        assert_eq!(convert(yaml("so much")).unwrap(), Value::from("so much"));
    }

    #[test]
    fn scalar_keys_are_stringified() {
        let v = convert(yaml("1: one\ntrue: yes\n")).unwrap();
        let map = v.as_mapping().unwrap();
        assert_eq!(map["1"], Value::from("one"));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn colliding_keys_rejected() {
        let err = convert(yaml("1: int\n\"1\": str\n")).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateKey(ref k) if k == "1"));

        let err = convert(yaml("true: a\n\"true\": b\n")).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateKey(ref k) if k == "true"));
    }

    #[test]
    fn sequence_key_rejected() {
        let err = convert(yaml("? [a, b]\n: value\n")).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedKey(_)));
    }

    #[test]
    fn infinity_rejected() {
        let err = convert(yaml(".inf")).unwrap_err();
        assert!(matches!(err, ParseError::NonFiniteNumber(_)));
    }

    #[test]
    fn tagged_value_unwrapped() {
        let v = convert(yaml("!custom {port: 80}")).unwrap();
        let map = v.as_mapping().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["port"], Value::from(80i64));
    }

    #[test]
    fn sequences_stay_opaque_arrays() {
        let v = convert(yaml("[1, two]")).unwrap();
        assert_eq!(v, Value::Array(vec![Value::from(1i64), Value::from("two")]));
    }
}
