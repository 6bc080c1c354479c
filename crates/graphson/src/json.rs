//! Helpers over the generic `serde_json` tree shared by the reader, the
//! writer and the built-in codecs.

use serde_json::{Map, Number, Value};

use crate::error::{GraphSONError, Result};
use crate::tags::{TYPE_KEY, VALUE_KEY};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Wraps a payload as `{"@type": tag, "@value": payload}`.
pub fn envelope(tag: &str, payload: Value) -> Value {
    let mut map = Map::with_capacity(2);
    map.insert(TYPE_KEY.to_owned(), Value::String(tag.to_owned()));
    map.insert(VALUE_KEY.to_owned(), payload);
    Value::Object(map)
}

/// Short human-readable description of a JSON value for error messages.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::Object(_) => "object".to_owned(),
    }
}

pub(crate) fn mismatch(tag: &str, expected: impl Into<String>, found: &Value) -> GraphSONError {
    GraphSONError::TypeMismatch {
        tag: tag.to_owned(),
        expected: expected.into(),
        found: describe(found),
    }
}

pub(crate) fn as_object<'a>(
    tag: &str,
    value: &'a Value,
    expected: &str,
) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| mismatch(tag, expected, value))
}

pub(crate) fn as_array<'a>(tag: &str, value: &'a Value, expected: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(tag, expected, value))
}

/// Required field of a structural payload.
pub(crate) fn field<'a>(tag: &str, obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    obj.get(key).ok_or_else(|| GraphSONError::TypeMismatch {
        tag: tag.to_owned(),
        expected: format!("object with field `{key}`"),
        found: format!("object without `{key}`"),
    })
}

/// Optional string field; present but non-string is a mismatch.
pub(crate) fn optional_str<'a>(
    tag: &str,
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>> {
    match obj.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(mismatch(tag, format!("string field `{key}`"), other)),
    }
}

pub(crate) fn required_str<'a>(
    tag: &str,
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str> {
    let value = field(tag, obj, key)?;
    value
        .as_str()
        .ok_or_else(|| mismatch(tag, format!("string field `{key}`"), value))
}

/// Encodes an `f64`; non-finite values use their string spellings.
pub fn double_to_json(value: f64) -> Value {
    match Number::from_f64(value) {
        Some(n) => Value::Number(n),
        None => Value::String(non_finite_name(value).to_owned()),
    }
}

/// Encodes an `f32` through its shortest decimal form so that `3.2f32`
/// is written as `3.2` rather than its widened `f64` expansion.
pub fn float_to_json(value: f32) -> Value {
    if !value.is_finite() {
        return Value::String(non_finite_name(f64::from(value)).to_owned());
    }
    let shortest = value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(value));
    double_to_json(shortest)
}

/// Reads a floating point payload: any JSON number, or one of the
/// non-finite string spellings.
pub fn json_to_double(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.as_str() {
            NAN => Some(f64::NAN),
            INFINITY => Some(f64::INFINITY),
            NEG_INFINITY => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

fn non_finite_name(value: f64) -> &'static str {
    if value.is_nan() {
        NAN
    } else if value > 0.0 {
        INFINITY
    } else {
        NEG_INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_key_order() {
        assert_eq!(
            envelope("g:Int32", json!(1)).to_string(),
            r#"{"@type":"g:Int32","@value":1}"#
        );
    }

    #[test]
    fn float_uses_shortest_form() {
        assert_eq!(float_to_json(3.2).to_string(), "3.2");
        assert_eq!(float_to_json(0.1).to_string(), "0.1");
        assert_eq!(float_to_json(-31.3).to_string(), "-31.3");
        assert_eq!(float_to_json(f32::INFINITY), json!("Infinity"));
        assert_eq!(double_to_json(f64::NEG_INFINITY), json!("-Infinity"));
        assert_eq!(double_to_json(f64::NAN), json!("NaN"));
    }

    #[test]
    fn double_from_json() {
        assert_eq!(json_to_double(&json!(1)), Some(1.0));
        assert_eq!(json_to_double(&json!(0.4)), Some(0.4));
        assert_eq!(json_to_double(&json!("Infinity")), Some(f64::INFINITY));
        assert!(json_to_double(&json!("NaN")).is_some_and(f64::is_nan));
        assert_eq!(json_to_double(&json!("1.5")), None);
        assert_eq!(json_to_double(&json!(true)), None);
    }

    #[test]
    fn describe_matrix() {
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!(false)), "boolean false");
        assert_eq!(describe(&json!(1.5)), "number 1.5");
        assert_eq!(describe(&json!("x")), "string \"x\"");
        assert_eq!(describe(&json!([1, 2])), "array of 2 items");
        assert_eq!(describe(&json!({})), "object");
    }

    #[test]
    fn missing_field_is_mismatch() {
        let obj = json!({"label": "person"});
        let map = obj.as_object().unwrap();
        let err = field("g:Vertex", map, "id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch for `g:Vertex`: expected object with field `id`, found object without `id`"
        );
        assert_eq!(optional_str("g:Vertex", map, "label").unwrap(), Some("person"));
        assert_eq!(optional_str("g:Vertex", map, "other").unwrap(), None);
    }
}
