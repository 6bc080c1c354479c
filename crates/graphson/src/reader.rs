//! GraphSON reader: tagged JSON back to native values.

use gremlin_structure::{GraphValue, IndexMap};
use serde_json::{Map, Number, Value};
use tracing::{debug, trace};

use crate::error::{GraphSONError, Result};
use crate::json::describe;
use crate::options::ReaderOptions;
use crate::registry::TypeRegistry;
use crate::tags::{self, TYPE_KEY, VALUE_KEY};

/// Decodes GraphSON using the decoders of a [`TypeRegistry`].
///
/// An object whose keys are exactly `@type` and `@value` is dispatched on
/// its tag. Everything else is read as plain JSON: arrays and objects
/// recursively, untagged integers as `Int32` when they fit and `Int64`
/// otherwise, other numbers as `Double`.
#[derive(Debug, Clone, Copy)]
pub struct GraphSONReader<'r> {
    registry: &'r TypeRegistry,
    options: ReaderOptions,
}

impl<'r> GraphSONReader<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_options(registry, ReaderOptions::default())
    }

    pub fn with_options(registry: &'r TypeRegistry, options: ReaderOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Parses and decodes JSON text.
    pub fn read_object(&self, text: &str) -> Result<GraphValue> {
        let json: Value = serde_json::from_str(text)?;
        self.read_value(&json)
    }

    /// Decodes a parsed JSON tree. Decoders call this for nested values.
    pub fn read_value(&self, json: &Value) -> Result<GraphValue> {
        match json {
            Value::Null => Ok(GraphValue::Null),
            Value::Bool(b) => Ok(GraphValue::Boolean(*b)),
            Value::Number(n) => untagged_number(n),
            Value::String(s) => Ok(GraphValue::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| self.read_value(item))
                .collect::<Result<Vec<_>>>()
                .map(GraphValue::List),
            Value::Object(obj) => match self.split_envelope(obj)? {
                Some((tag, payload)) => self.read_tagged(tag, payload),
                None => {
                    let mut map = IndexMap::with_capacity(obj.len());
                    for (key, item) in obj {
                        map.insert(key.clone(), self.read_value(item)?);
                    }
                    Ok(GraphValue::Map(map))
                }
            },
        }
    }

    fn read_tagged(&self, tag: &str, payload: &Value) -> Result<GraphValue> {
        let Some(decode) = self.registry.decoder_for(tag) else {
            let namespace = tags::split(tag).map(|(ns, _)| ns);
            debug!(%tag, ?namespace, "no GraphSON decoder registered");
            return Err(GraphSONError::UnknownType(tag.to_owned()));
        };
        trace!(%tag, "decoding tagged value");
        decode(payload, self)
    }

    /// `Some((tag, payload))` when `obj` is an envelope, `None` when it is a
    /// plain map.
    fn split_envelope<'a>(
        &self,
        obj: &'a Map<String, Value>,
    ) -> Result<Option<(&'a str, &'a Value)>> {
        let Some(tag) = obj.get(TYPE_KEY) else {
            return Ok(None);
        };
        let Some(payload) = obj.get(VALUE_KEY) else {
            return Err(GraphSONError::MalformedEnvelope(format!(
                "`{TYPE_KEY}` without `{VALUE_KEY}`"
            )));
        };
        if obj.len() != 2 {
            if self.options.strict_envelopes {
                return Err(GraphSONError::MalformedEnvelope(format!(
                    "envelope has {} keys, expected only `{TYPE_KEY}` and `{VALUE_KEY}`",
                    obj.len()
                )));
            }
            return Ok(None);
        }
        let Value::String(tag) = tag else {
            return Err(GraphSONError::MalformedEnvelope(format!(
                "`{TYPE_KEY}` must be a string, found {}",
                describe(tag)
            )));
        };
        Ok(Some((tag.as_str(), payload)))
    }
}

fn untagged_number(n: &Number) -> Result<GraphValue> {
    if let Some(v) = n.as_i64() {
        return Ok(match i32::try_from(v) {
            Ok(narrow) => GraphValue::Int32(narrow),
            Err(_) => GraphValue::Int64(v),
        });
    }
    if n.is_u64() {
        return Err(GraphSONError::TypeMismatch {
            tag: "untagged number".to_owned(),
            expected: "integer within 64-bit signed range".to_owned(),
            found: format!("number {n}"),
        });
    }
    n.as_f64()
        .map(GraphValue::Double)
        .ok_or_else(|| GraphSONError::TypeMismatch {
            tag: "untagged number".to_owned(),
            expected: "finite number".to_owned(),
            found: format!("number {n}"),
        })
}

/// Decodes `text` with the process-wide registry.
pub fn read_object(text: &str) -> Result<GraphValue> {
    GraphSONReader::new(TypeRegistry::global()).read_object(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn untagged_scalars_pass_through() {
        let registry = TypeRegistry::with_builtins();
        let reader = GraphSONReader::new(&registry);
        assert_eq!(
            reader.read_object("\"marko\"").unwrap(),
            GraphValue::from("marko")
        );
        assert_eq!(reader.read_object("true").unwrap(), GraphValue::Boolean(true));
        assert_eq!(reader.read_object("null").unwrap(), GraphValue::Null);
        assert_eq!(reader.read_object("7").unwrap(), GraphValue::Int32(7));
        assert_eq!(
            reader.read_object("4294967296").unwrap(),
            GraphValue::Int64(4_294_967_296)
        );
        assert_eq!(reader.read_object("0.25").unwrap(), GraphValue::Double(0.25));
        assert!(reader.read_object("18446744073709551615").is_err());
    }

    #[test]
    fn plain_objects_become_maps() {
        let registry = TypeRegistry::with_builtins();
        let reader = GraphSONReader::new(&registry);
        let value = reader
            .read_value(&json!({"z": {"@type": "g:Int64", "@value": 1}, "a": [true]}))
            .unwrap();
        let GraphValue::Map(map) = value else {
            panic!("expected a map");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(map["z"], GraphValue::Int64(1));
        assert_eq!(map["a"], GraphValue::List(vec![GraphValue::Boolean(true)]));
    }

    #[test]
    fn envelope_without_value_is_malformed() {
        let registry = TypeRegistry::with_builtins();
        let reader = GraphSONReader::new(&registry);
        let err = reader.read_object(r#"{"@type":"g:Int32"}"#).unwrap_err();
        assert!(matches!(err, GraphSONError::MalformedEnvelope(_)));
    }

    #[test]
    fn non_string_tag_is_malformed() {
        let registry = TypeRegistry::with_builtins();
        let reader = GraphSONReader::new(&registry);
        let err = reader
            .read_object(r#"{"@type":5,"@value":1}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed envelope: `@type` must be a string, found number 5"
        );
    }

    #[test]
    fn extra_keys_depend_on_strictness() {
        let registry = TypeRegistry::with_builtins();
        let text = r#"{"@type":"g:Int32","@value":1,"extra":true}"#;

        let lenient = GraphSONReader::new(&registry);
        assert!(matches!(
            lenient.read_object(text).unwrap(),
            GraphValue::Map(_)
        ));

        let strict =
            GraphSONReader::with_options(&registry, ReaderOptions { strict_envelopes: true });
        assert!(matches!(
            strict.read_object(text),
            Err(GraphSONError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let registry = TypeRegistry::with_builtins();
        let reader = GraphSONReader::new(&registry);
        assert!(matches!(
            reader.read_object("{\"@type\":"),
            Err(GraphSONError::Parse(_))
        ));
    }
}
