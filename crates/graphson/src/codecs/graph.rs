//! Structural codecs: `g:Vertex`, `g:Edge`, `g:VertexProperty`, `g:Property`.
//!
//! Vertex payload:
//!
//! ```json
//! {
//!   "id": <value>, "label": "person",
//!   "outE": { "<edge label>": [ { "id": <value>, "inV": <value>, "properties": { "<key>": <value> } } ] },
//!   "properties": { "<key>": [ { "id": <value>, "value": <value> } ] }
//! }
//! ```
//!
//! Edges nested under `outE` take their label from the group key and their
//! out-vertex from the enclosing vertex. `inV` is only ever an identity.

use gremlin_structure::{
    Edge, GraphValue, IndexMap, Property, Vertex, VertexProperty, DEFAULT_EDGE_LABEL,
    DEFAULT_VERTEX_LABEL,
};
use serde_json::{Map, Value};

use crate::error::{GraphSONError, Result};
use crate::json::{as_array, as_object, field, mismatch, optional_str, required_str};
use crate::reader::GraphSONReader;
use crate::tags::{self, TYPE_KEY};
use crate::writer::GraphSONWriter;

const ID: &str = "id";
const LABEL: &str = "label";
const KEY: &str = "key";
const VALUE: &str = "value";
const OUT_E: &str = "outE";
const IN_V: &str = "inV";
const OUT_V: &str = "outV";
const IN_V_LABEL: &str = "inVLabel";
const OUT_V_LABEL: &str = "outVLabel";
const PROPERTIES: &str = "properties";

// ── Encode ──────────────────────────────────────────────────────────────────

pub(crate) fn encode_vertex(value: &GraphValue, writer: &GraphSONWriter<'_>) -> Result<Value> {
    let GraphValue::Vertex(vertex) = value else {
        return Err(GraphSONError::UnsupportedType(value.kind()));
    };
    let mut payload = Map::new();
    payload.insert(ID.into(), writer.write_value(&vertex.id)?);
    payload.insert(LABEL.into(), Value::String(vertex.label.clone()));

    if !vertex.out_edges.is_empty() {
        let mut groups = Map::new();
        for (label, edges) in &vertex.out_edges {
            let items = edges
                .iter()
                .map(|edge| encode_out_edge(edge, writer))
                .collect::<Result<Vec<_>>>()?;
            groups.insert(label.clone(), Value::Array(items));
        }
        payload.insert(OUT_E.into(), Value::Object(groups));
    }

    if !vertex.properties.is_empty() {
        let mut groups = Map::new();
        for (key, values) in &vertex.properties {
            let items = values
                .iter()
                .map(|vp| {
                    let mut entry = Map::new();
                    entry.insert(ID.into(), writer.write_value(&vp.id)?);
                    entry.insert(VALUE.into(), writer.write_value(&vp.value)?);
                    Ok(Value::Object(entry))
                })
                .collect::<Result<Vec<_>>>()?;
            groups.insert(key.clone(), Value::Array(items));
        }
        payload.insert(PROPERTIES.into(), Value::Object(groups));
    }

    Ok(Value::Object(payload))
}

fn encode_out_edge(edge: &Edge, writer: &GraphSONWriter<'_>) -> Result<Value> {
    let mut payload = Map::new();
    payload.insert(ID.into(), writer.write_value(&edge.id)?);
    payload.insert(IN_V.into(), writer.write_value(&edge.in_v)?);
    if let Some(label) = &edge.in_v_label {
        payload.insert(IN_V_LABEL.into(), Value::String(label.clone()));
    }
    encode_edge_properties(edge, writer, &mut payload)?;
    Ok(Value::Object(payload))
}

fn encode_edge_properties(
    edge: &Edge,
    writer: &GraphSONWriter<'_>,
    payload: &mut Map<String, Value>,
) -> Result<()> {
    if edge.properties.is_empty() {
        return Ok(());
    }
    let mut props = Map::new();
    for (key, property) in &edge.properties {
        props.insert(key.clone(), writer.write_value(&property.value)?);
    }
    payload.insert(PROPERTIES.into(), Value::Object(props));
    Ok(())
}

pub(crate) fn encode_edge(value: &GraphValue, writer: &GraphSONWriter<'_>) -> Result<Value> {
    let GraphValue::Edge(edge) = value else {
        return Err(GraphSONError::UnsupportedType(value.kind()));
    };
    let mut payload = Map::new();
    payload.insert(ID.into(), writer.write_value(&edge.id)?);
    payload.insert(LABEL.into(), Value::String(edge.label.clone()));
    if let Some(label) = &edge.in_v_label {
        payload.insert(IN_V_LABEL.into(), Value::String(label.clone()));
    }
    if let Some(label) = &edge.out_v_label {
        payload.insert(OUT_V_LABEL.into(), Value::String(label.clone()));
    }
    payload.insert(IN_V.into(), writer.write_value(&edge.in_v)?);
    payload.insert(OUT_V.into(), writer.write_value(&edge.out_v)?);
    encode_edge_properties(edge, writer, &mut payload)?;
    Ok(Value::Object(payload))
}

pub(crate) fn encode_vertex_property(
    value: &GraphValue,
    writer: &GraphSONWriter<'_>,
) -> Result<Value> {
    let GraphValue::VertexProperty(vp) = value else {
        return Err(GraphSONError::UnsupportedType(value.kind()));
    };
    let mut payload = Map::new();
    payload.insert(ID.into(), writer.write_value(&vp.id)?);
    payload.insert(VALUE.into(), writer.write_value(&vp.value)?);
    payload.insert(LABEL.into(), Value::String(vp.label.clone()));
    Ok(Value::Object(payload))
}

pub(crate) fn encode_property(value: &GraphValue, writer: &GraphSONWriter<'_>) -> Result<Value> {
    let GraphValue::Property(property) = value else {
        return Err(GraphSONError::UnsupportedType(value.kind()));
    };
    let mut payload = Map::new();
    payload.insert(KEY.into(), Value::String(property.key.clone()));
    payload.insert(VALUE.into(), writer.write_value(&property.value)?);
    Ok(Value::Object(payload))
}

// ── Decode ──────────────────────────────────────────────────────────────────

pub(crate) fn decode_vertex(payload: &Value, reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    let obj = as_object(tags::VERTEX, payload, "vertex object")?;
    let id = reader.read_value(field(tags::VERTEX, obj, ID)?)?;
    let label = optional_str(tags::VERTEX, obj, LABEL)?.unwrap_or(DEFAULT_VERTEX_LABEL);
    let mut vertex = Vertex::with_label(id, label);

    if let Some(out_e) = obj.get(OUT_E) {
        let groups = as_object(tags::VERTEX, out_e, "`outE` object")?;
        for (edge_label, entries) in groups {
            let entries = as_array(tags::VERTEX, entries, "array of edges")?;
            let edges = entries
                .iter()
                .map(|entry| decode_out_edge(entry, &vertex.id, edge_label, reader))
                .collect::<Result<Vec<_>>>()?;
            vertex.out_edges.insert(edge_label.clone(), edges);
        }
    }

    if let Some(properties) = obj.get(PROPERTIES) {
        let groups = as_object(tags::VERTEX, properties, "`properties` object")?;
        for (key, entries) in groups {
            let entries = as_array(tags::VERTEX, entries, "array of vertex properties")?;
            let values = entries
                .iter()
                .map(|entry| decode_vertex_property_entry(entry, key, reader))
                .collect::<Result<Vec<_>>>()?;
            vertex.properties.insert(key.clone(), values);
        }
    }

    Ok(vertex.into())
}

fn decode_out_edge(
    entry: &Value,
    out_v: &GraphValue,
    label: &str,
    reader: &GraphSONReader<'_>,
) -> Result<Edge> {
    let obj = as_object(tags::VERTEX, entry, "edge object")?;
    let id = reader.read_value(field(tags::VERTEX, obj, ID)?)?;
    let in_v = reader.read_value(field(tags::VERTEX, obj, IN_V)?)?;
    let mut edge = Edge::new(id, out_v.clone(), label, in_v);
    edge.in_v_label = optional_str(tags::VERTEX, obj, IN_V_LABEL)?.map(str::to_owned);
    edge.properties = decode_edge_properties(tags::VERTEX, obj, reader)?;
    Ok(edge)
}

/// Edge properties are `{key: value}`; a fully tagged `g:Property` value is
/// accepted too, as long as its own key matches the map key.
fn decode_edge_properties(
    tag: &str,
    obj: &Map<String, Value>,
    reader: &GraphSONReader<'_>,
) -> Result<IndexMap<String, Property>> {
    let mut properties = IndexMap::new();
    let Some(raw) = obj.get(PROPERTIES) else {
        return Ok(properties);
    };
    for (key, value) in as_object(tag, raw, "`properties` object")? {
        let property = match reader.read_value(value)? {
            GraphValue::Property(property) if property.key == *key => *property,
            GraphValue::Property(property) => {
                return Err(GraphSONError::TypeMismatch {
                    tag: tag.to_owned(),
                    expected: format!("property keyed `{key}`"),
                    found: format!("property keyed `{}`", property.key),
                });
            }
            value => Property::new(key.clone(), value),
        };
        properties.insert(key.clone(), property);
    }
    Ok(properties)
}

/// A vertex property entry is either the bare `{id, value}` payload or a
/// complete `g:VertexProperty` envelope.
fn decode_vertex_property_entry(
    entry: &Value,
    key: &str,
    reader: &GraphSONReader<'_>,
) -> Result<VertexProperty> {
    let obj = as_object(tags::VERTEX, entry, "vertex property object")?;
    if obj.contains_key(TYPE_KEY) {
        return match reader.read_value(entry)? {
            GraphValue::VertexProperty(vp) => Ok(*vp),
            _ => Err(mismatch(tags::VERTEX, "vertex property", entry)),
        };
    }
    let id = reader.read_value(field(tags::VERTEX, obj, ID)?)?;
    let value = reader.read_value(field(tags::VERTEX, obj, VALUE)?)?;
    Ok(VertexProperty::new(id, key, value))
}

pub(crate) fn decode_edge(payload: &Value, reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    let obj = as_object(tags::EDGE, payload, "edge object")?;
    let id = reader.read_value(field(tags::EDGE, obj, ID)?)?;
    let label = optional_str(tags::EDGE, obj, LABEL)?.unwrap_or(DEFAULT_EDGE_LABEL);
    let out_v = reader.read_value(field(tags::EDGE, obj, OUT_V)?)?;
    let in_v = reader.read_value(field(tags::EDGE, obj, IN_V)?)?;
    let mut edge = Edge::new(id, out_v, label, in_v);
    edge.in_v_label = optional_str(tags::EDGE, obj, IN_V_LABEL)?.map(str::to_owned);
    edge.out_v_label = optional_str(tags::EDGE, obj, OUT_V_LABEL)?.map(str::to_owned);
    edge.properties = decode_edge_properties(tags::EDGE, obj, reader)?;
    Ok(edge.into())
}

pub(crate) fn decode_vertex_property(
    payload: &Value,
    reader: &GraphSONReader<'_>,
) -> Result<GraphValue> {
    let obj = as_object(tags::VERTEX_PROPERTY, payload, "vertex property object")?;
    let id = reader.read_value(field(tags::VERTEX_PROPERTY, obj, ID)?)?;
    let label = required_str(tags::VERTEX_PROPERTY, obj, LABEL)?;
    let value = reader.read_value(field(tags::VERTEX_PROPERTY, obj, VALUE)?)?;
    Ok(VertexProperty::new(id, label, value).into())
}

pub(crate) fn decode_property(payload: &Value, reader: &GraphSONReader<'_>) -> Result<GraphValue> {
    let obj = as_object(tags::PROPERTY, payload, "property object")?;
    let key = required_str(tags::PROPERTY, obj, KEY)?;
    let value = reader.read_value(field(tags::PROPERTY, obj, VALUE)?)?;
    Ok(Property::new(key, value).into())
}
