//! Scalar codecs: `g:Int32`, `g:Int64`, `g:Float`, `g:Double`, `g:Boolean`.
//!
//! Each decoder yields exactly the width named by its tag and rejects
//! payloads that do not fit it.

use gremlin_structure::GraphValue;
use serde_json::Value;

use crate::error::{GraphSONError, Result};
use crate::json::{double_to_json, float_to_json, json_to_double, mismatch};
use crate::reader::GraphSONReader;
use crate::tags;
use crate::writer::GraphSONWriter;

// ── Encode ──────────────────────────────────────────────────────────────────

pub(crate) fn encode_int32(value: &GraphValue, _writer: &GraphSONWriter<'_>) -> Result<Value> {
    match value {
        GraphValue::Int32(v) => Ok(Value::from(*v)),
        other => Err(GraphSONError::UnsupportedType(other.kind())),
    }
}

pub(crate) fn encode_int64(value: &GraphValue, _writer: &GraphSONWriter<'_>) -> Result<Value> {
    match value {
        GraphValue::Int64(v) => Ok(Value::from(*v)),
        other => Err(GraphSONError::UnsupportedType(other.kind())),
    }
}

pub(crate) fn encode_float(value: &GraphValue, _writer: &GraphSONWriter<'_>) -> Result<Value> {
    match value {
        GraphValue::Float(v) => Ok(float_to_json(*v)),
        other => Err(GraphSONError::UnsupportedType(other.kind())),
    }
}

pub(crate) fn encode_double(value: &GraphValue, _writer: &GraphSONWriter<'_>) -> Result<Value> {
    match value {
        GraphValue::Double(v) => Ok(double_to_json(*v)),
        other => Err(GraphSONError::UnsupportedType(other.kind())),
    }
}

// ── Decode ──────────────────────────────────────────────────────────────────

pub(crate) fn decode_int32(payload: &Value, _reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    payload
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .map(GraphValue::Int32)
        .ok_or_else(|| mismatch(tags::INT32, "32-bit signed integer", payload))
}

pub(crate) fn decode_int64(payload: &Value, _reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    payload
        .as_i64()
        .map(GraphValue::Int64)
        .ok_or_else(|| mismatch(tags::INT64, "64-bit signed integer", payload))
}

pub(crate) fn decode_float(payload: &Value, _reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    let wide = json_to_double(payload)
        .ok_or_else(|| mismatch(tags::FLOAT, "single-precision number", payload))?;
    let narrow = wide as f32;
    let overflows = wide.is_finite() && !narrow.is_finite();
    let underflows = wide != 0.0 && narrow == 0.0;
    if overflows || underflows {
        return Err(mismatch(
            tags::FLOAT,
            "number within single-precision range",
            payload,
        ));
    }
    Ok(GraphValue::Float(narrow))
}

pub(crate) fn decode_double(payload: &Value, _reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    json_to_double(payload)
        .map(GraphValue::Double)
        .ok_or_else(|| mismatch(tags::DOUBLE, "double-precision number", payload))
}

pub(crate) fn decode_boolean(
    payload: &Value,
    _reader: &GraphSONReader<'_>,
) -> Result<GraphValue> {
    payload
        .as_bool()
        .map(GraphValue::Boolean)
        .ok_or_else(|| mismatch(tags::BOOLEAN, "boolean", payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use serde_json::json;

    fn reader(registry: &TypeRegistry) -> GraphSONReader<'_> {
        GraphSONReader::new(registry)
    }

    #[test]
    fn int32_range_is_enforced() {
        let registry = TypeRegistry::empty();
        let r = reader(&registry);
        assert_eq!(
            decode_int32(&json!(2_147_483_647), &r).unwrap(),
            GraphValue::Int32(i32::MAX)
        );
        assert!(decode_int32(&json!(2_147_483_648i64), &r).is_err());
        assert!(decode_int32(&json!(31.0), &r).is_err());
        assert!(decode_int32(&json!("31"), &r).is_err());
    }

    #[test]
    fn int64_rejects_floats_and_overflow() {
        let registry = TypeRegistry::empty();
        let r = reader(&registry);
        assert_eq!(
            decode_int64(&json!(31), &r).unwrap(),
            GraphValue::Int64(31)
        );
        assert!(decode_int64(&json!(u64::MAX), &r).is_err());
        assert!(decode_int64(&json!(1.5), &r).is_err());
    }

    #[test]
    fn float_narrows_and_checks_range() {
        let registry = TypeRegistry::empty();
        let r = reader(&registry);
        assert_eq!(
            decode_float(&json!(31.3), &r).unwrap(),
            GraphValue::Float(31.3)
        );
        assert_eq!(
            decode_float(&json!(2), &r).unwrap(),
            GraphValue::Float(2.0)
        );
        assert_eq!(
            decode_float(&json!("-Infinity"), &r).unwrap(),
            GraphValue::Float(f32::NEG_INFINITY)
        );
        assert!(decode_float(&json!(1e300), &r).is_err());
        assert!(decode_float(&json!(1e-50), &r).is_err());
        assert!(decode_float(&json!(-1e-50), &r).is_err());
        assert_eq!(
            decode_float(&json!(1e-40), &r).unwrap(),
            GraphValue::Float(1e-40)
        );
        assert_eq!(
            decode_float(&json!(0.0), &r).unwrap(),
            GraphValue::Float(0.0)
        );
        assert!(decode_float(&json!(null), &r).is_err());
    }

    #[test]
    fn double_accepts_integers_and_special_strings() {
        let registry = TypeRegistry::empty();
        let r = reader(&registry);
        assert_eq!(
            decode_double(&json!(1), &r).unwrap(),
            GraphValue::Double(1.0)
        );
        assert!(matches!(
            decode_double(&json!("NaN"), &r).unwrap(),
            GraphValue::Double(v) if v.is_nan()
        ));
        assert!(decode_double(&json!("fast"), &r).is_err());
    }

    #[test]
    fn boolean_payload_must_be_boolean() {
        let registry = TypeRegistry::empty();
        let r = reader(&registry);
        assert_eq!(
            decode_boolean(&json!(false), &r).unwrap(),
            GraphValue::Boolean(false)
        );
        let err = decode_boolean(&json!(0), &r).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch for `g:Boolean`: expected boolean, found number 0"
        );
    }

    #[test]
    fn encoders_reject_other_widths() {
        let registry = TypeRegistry::empty();
        let w = GraphSONWriter::new(&registry);
        assert_eq!(encode_int64(&GraphValue::Int64(2), &w).unwrap(), json!(2));
        assert!(matches!(
            encode_int32(&GraphValue::Int64(2), &w),
            Err(GraphSONError::UnsupportedType(_))
        ));
    }
}
