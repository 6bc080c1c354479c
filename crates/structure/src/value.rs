//! [`GraphValue`]: the native value sum type populated by GraphSON decoding.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::{Edge, Extension, Property, Vertex, VertexProperty};

/// A decoded, strongly-typed graph value.
///
/// Numeric variants keep the exact width they were tagged with: an `Int32`
/// never compares equal to an `Int64` holding the same number.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphValue {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<GraphValue>),
    Map(IndexMap<String, GraphValue>),
    Vertex(Box<Vertex>),
    Edge(Box<Edge>),
    VertexProperty(Box<VertexProperty>),
    Property(Box<Property>),
    Extension(Extension),
}

/// Discriminant of a [`GraphValue`].
///
/// Used as the lookup key when choosing an encoder for a value, so dispatch
/// is by declared type and never by magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Int32,
    Int64,
    Float,
    Double,
    String,
    List,
    Map,
    Vertex,
    Edge,
    VertexProperty,
    Property,
    /// A caller-defined type, keyed by its type name.
    Extension(String),
}

impl GraphValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            GraphValue::Null => ValueKind::Null,
            GraphValue::Boolean(_) => ValueKind::Boolean,
            GraphValue::Int32(_) => ValueKind::Int32,
            GraphValue::Int64(_) => ValueKind::Int64,
            GraphValue::Float(_) => ValueKind::Float,
            GraphValue::Double(_) => ValueKind::Double,
            GraphValue::String(_) => ValueKind::String,
            GraphValue::List(_) => ValueKind::List,
            GraphValue::Map(_) => ValueKind::Map,
            GraphValue::Vertex(_) => ValueKind::Vertex,
            GraphValue::Edge(_) => ValueKind::Edge,
            GraphValue::VertexProperty(_) => ValueKind::VertexProperty,
            GraphValue::Property(_) => ValueKind::Property,
            GraphValue::Extension(ext) => ValueKind::Extension(ext.type_name.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GraphValue::Null)
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            GraphValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GraphValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            GraphValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GraphValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GraphValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GraphValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            GraphValue::Vertex(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            GraphValue::Edge(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_vertex_property(&self) -> Option<&VertexProperty> {
        match self {
            GraphValue::VertexProperty(vp) => Some(vp),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match self {
            GraphValue::Property(p) => Some(p),
            _ => None,
        }
    }
}

/// Consistent with `PartialEq`: `0.0` and `-0.0` hash alike, maps hash by
/// length only since their equality ignores order, and extensions hash by
/// type name.
impl Hash for GraphValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            GraphValue::Null => {}
            GraphValue::Boolean(v) => v.hash(state),
            GraphValue::Int32(v) => v.hash(state),
            GraphValue::Int64(v) => v.hash(state),
            GraphValue::Float(v) => {
                let v = if *v == 0.0 { 0.0 } else { *v };
                v.to_bits().hash(state);
            }
            GraphValue::Double(v) => {
                let v = if *v == 0.0 { 0.0 } else { *v };
                v.to_bits().hash(state);
            }
            GraphValue::String(s) => s.hash(state),
            GraphValue::List(items) => items.hash(state),
            GraphValue::Map(entries) => entries.len().hash(state),
            GraphValue::Vertex(v) => v.hash(state),
            GraphValue::Edge(e) => e.hash(state),
            GraphValue::VertexProperty(vp) => vp.hash(state),
            GraphValue::Property(p) => {
                p.key.hash(state);
                p.value.hash(state);
            }
            GraphValue::Extension(ext) => ext.type_name.hash(state),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => f.write_str("null"),
            ValueKind::Boolean => f.write_str("boolean"),
            ValueKind::Int32 => f.write_str("int32"),
            ValueKind::Int64 => f.write_str("int64"),
            ValueKind::Float => f.write_str("float"),
            ValueKind::Double => f.write_str("double"),
            ValueKind::String => f.write_str("string"),
            ValueKind::List => f.write_str("list"),
            ValueKind::Map => f.write_str("map"),
            ValueKind::Vertex => f.write_str("vertex"),
            ValueKind::Edge => f.write_str("edge"),
            ValueKind::VertexProperty => f.write_str("vertex property"),
            ValueKind::Property => f.write_str("property"),
            ValueKind::Extension(name) => write!(f, "extension `{name}`"),
        }
    }
}

impl fmt::Display for GraphValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphValue::Null => f.write_str("null"),
            GraphValue::Boolean(v) => write!(f, "{v}"),
            GraphValue::Int32(v) => write!(f, "{v}"),
            GraphValue::Int64(v) => write!(f, "{v}"),
            GraphValue::Float(v) => write!(f, "{v}"),
            GraphValue::Double(v) => write!(f, "{v}"),
            GraphValue::String(s) => f.write_str(s),
            GraphValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            GraphValue::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
            GraphValue::Vertex(v) => write!(f, "{v}"),
            GraphValue::Edge(e) => write!(f, "{e}"),
            GraphValue::VertexProperty(vp) => write!(f, "{vp}"),
            GraphValue::Property(p) => write!(f, "{p}"),
            GraphValue::Extension(ext) => write!(f, "{ext}"),
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl From<bool> for GraphValue {
    fn from(v: bool) -> Self {
        GraphValue::Boolean(v)
    }
}

impl From<i32> for GraphValue {
    fn from(v: i32) -> Self {
        GraphValue::Int32(v)
    }
}

impl From<i64> for GraphValue {
    fn from(v: i64) -> Self {
        GraphValue::Int64(v)
    }
}

impl From<f32> for GraphValue {
    fn from(v: f32) -> Self {
        GraphValue::Float(v)
    }
}

impl From<f64> for GraphValue {
    fn from(v: f64) -> Self {
        GraphValue::Double(v)
    }
}

impl From<&str> for GraphValue {
    fn from(v: &str) -> Self {
        GraphValue::String(v.to_owned())
    }
}

impl From<String> for GraphValue {
    fn from(v: String) -> Self {
        GraphValue::String(v)
    }
}

impl From<Vec<GraphValue>> for GraphValue {
    fn from(v: Vec<GraphValue>) -> Self {
        GraphValue::List(v)
    }
}

impl From<IndexMap<String, GraphValue>> for GraphValue {
    fn from(v: IndexMap<String, GraphValue>) -> Self {
        GraphValue::Map(v)
    }
}

impl From<Vertex> for GraphValue {
    fn from(v: Vertex) -> Self {
        GraphValue::Vertex(Box::new(v))
    }
}

impl From<Edge> for GraphValue {
    fn from(e: Edge) -> Self {
        GraphValue::Edge(Box::new(e))
    }
}

impl From<VertexProperty> for GraphValue {
    fn from(vp: VertexProperty) -> Self {
        GraphValue::VertexProperty(Box::new(vp))
    }
}

impl From<Property> for GraphValue {
    fn from(p: Property) -> Self {
        GraphValue::Property(Box::new(p))
    }
}

impl From<Extension> for GraphValue {
    fn from(ext: Extension) -> Self {
        GraphValue::Extension(ext)
    }
}
