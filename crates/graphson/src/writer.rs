//! GraphSON writer: native values to tagged JSON.

use gremlin_structure::GraphValue;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{GraphSONError, Result};
use crate::json::envelope;
use crate::options::WriterOptions;
use crate::registry::TypeRegistry;

/// Encodes [`GraphValue`]s using the encoders of a [`TypeRegistry`].
///
/// Values with a registered encoder are wrapped in a `{"@type", "@value"}`
/// envelope. Booleans, strings, null, lists and maps fall back to plain JSON
/// when no encoder claims them; anything else is
/// [`GraphSONError::UnsupportedType`].
#[derive(Debug, Clone, Copy)]
pub struct GraphSONWriter<'r> {
    registry: &'r TypeRegistry,
    options: WriterOptions,
}

impl<'r> GraphSONWriter<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_options(registry, WriterOptions::default())
    }

    pub fn with_options(registry: &'r TypeRegistry, options: WriterOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn options(&self) -> WriterOptions {
        self.options
    }

    /// Encodes `value` to JSON text.
    pub fn write_object(&self, value: &GraphValue) -> Result<String> {
        let json = self.write_value(value)?;
        if self.options.pretty {
            Ok(format!("{json:#}"))
        } else {
            Ok(json.to_string())
        }
    }

    /// Encodes `value` to a JSON tree. Encoders call this for nested values.
    pub fn write_value(&self, value: &GraphValue) -> Result<Value> {
        if let Some((tag, encode)) = self.registry.encoder_for(value) {
            trace!(%tag, "encoding tagged value");
            let payload = encode(value, self)?;
            return Ok(envelope(&tag, payload));
        }
        match value {
            GraphValue::Null => Ok(Value::Null),
            GraphValue::Boolean(b) => Ok(Value::Bool(*b)),
            GraphValue::String(s) => Ok(Value::String(s.clone())),
            GraphValue::List(items) => items
                .iter()
                .map(|item| self.write_value(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            GraphValue::Map(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    map.insert(key.clone(), self.write_value(item)?);
                }
                Ok(Value::Object(map))
            }
            other => {
                let kind = other.kind();
                debug!(%kind, "no GraphSON encoder registered");
                Err(GraphSONError::UnsupportedType(kind))
            }
        }
    }
}

/// Encodes `value` with the process-wide registry.
pub fn write_object(value: &GraphValue) -> Result<String> {
    GraphSONWriter::new(TypeRegistry::global()).write_object(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gremlin_structure::{Extension, IndexMap, ValueKind};
    use serde_json::json;

    #[test]
    fn plain_json_fallback() {
        let registry = TypeRegistry::with_builtins();
        let writer = GraphSONWriter::new(&registry);
        assert_eq!(writer.write_object(&true.into()).unwrap(), "true");
        assert_eq!(writer.write_object(&"marko".into()).unwrap(), "\"marko\"");
        assert_eq!(writer.write_object(&GraphValue::Null).unwrap(), "null");
    }

    #[test]
    fn collections_encode_elementwise() {
        let registry = TypeRegistry::with_builtins();
        let writer = GraphSONWriter::new(&registry);
        let mut map = IndexMap::new();
        map.insert("b".to_owned(), GraphValue::Int64(2));
        map.insert("a".to_owned(), GraphValue::List(vec![1.into(), "x".into()]));
        assert_eq!(
            writer.write_value(&GraphValue::Map(map)).unwrap().to_string(),
            r#"{"b":{"@type":"g:Int64","@value":2},"a":[{"@type":"g:Int32","@value":1},"x"]}"#
        );
    }

    #[test]
    fn unregistered_extension_is_unsupported() {
        let registry = TypeRegistry::with_builtins();
        let writer = GraphSONWriter::new(&registry);
        let value = GraphValue::from(Extension::new("uuid", json!("0-1")));
        let err = writer.write_object(&value).unwrap_err();
        assert!(matches!(
            err,
            GraphSONError::UnsupportedType(ValueKind::Extension(ref name)) if name == "uuid"
        ));
    }

    #[test]
    fn empty_registry_rejects_numbers() {
        let registry = TypeRegistry::empty();
        let writer = GraphSONWriter::new(&registry);
        assert!(matches!(
            writer.write_object(&GraphValue::Int32(1)),
            Err(GraphSONError::UnsupportedType(ValueKind::Int32))
        ));
        assert_eq!(writer.write_object(&true.into()).unwrap(), "true");
    }

    #[test]
    fn pretty_output() {
        let registry = TypeRegistry::with_builtins();
        let writer = GraphSONWriter::with_options(&registry, WriterOptions { pretty: true });
        assert_eq!(
            writer.write_object(&GraphValue::Int32(1)).unwrap(),
            "{\n  \"@type\": \"g:Int32\",\n  \"@value\": 1\n}"
        );
    }
}
