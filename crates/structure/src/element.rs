//! Graph elements: [`Vertex`], [`Edge`], [`VertexProperty`] and [`Property`].
//!
//! Elements with an identity (vertices, edges, vertex properties) compare by
//! id alone. A [`Property`] has no identity and compares by key and value.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::GraphValue;

pub const DEFAULT_VERTEX_LABEL: &str = "vertex";
pub const DEFAULT_EDGE_LABEL: &str = "edge";

// ── Vertex ──────────────────────────────────────────────────────────────────

/// A vertex with its outgoing edges grouped by label and its properties
/// grouped by key.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: GraphValue,
    pub label: String,
    pub out_edges: IndexMap<String, Vec<Edge>>,
    pub properties: IndexMap<String, Vec<VertexProperty>>,
}

impl Vertex {
    pub fn new(id: impl Into<GraphValue>) -> Self {
        Self::with_label(id, DEFAULT_VERTEX_LABEL)
    }

    pub fn with_label(id: impl Into<GraphValue>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            out_edges: IndexMap::new(),
            properties: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &GraphValue {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends an outgoing edge to the group named by the edge's label.
    pub fn add_edge(&mut self, edge: Edge) {
        self.out_edges
            .entry(edge.label.clone())
            .or_default()
            .push(edge);
    }

    /// Appends a property value; repeated keys accumulate in insertion order.
    pub fn add_property(&mut self, property: VertexProperty) {
        self.properties
            .entry(property.label.clone())
            .or_default()
            .push(property);
    }

    pub fn out_edges(&self, label: &str) -> &[Edge] {
        self.out_edges.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_labels(&self) -> impl Iterator<Item = &str> {
        self.out_edges.keys().map(String::as_str)
    }

    pub fn properties(&self, key: &str) -> &[VertexProperty] {
        self.properties.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// First value stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&GraphValue> {
        self.properties(key).first().map(|vp| &vp.value)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v[{}]", self.id)
    }
}

// ── Edge ────────────────────────────────────────────────────────────────────

/// A directed edge. Both endpoints are held by identity only.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: GraphValue,
    pub label: String,
    pub out_v: GraphValue,
    pub in_v: GraphValue,
    pub out_v_label: Option<String>,
    pub in_v_label: Option<String>,
    pub properties: IndexMap<String, Property>,
}

impl Edge {
    pub fn new(
        id: impl Into<GraphValue>,
        out_v: impl Into<GraphValue>,
        label: impl Into<String>,
        in_v: impl Into<GraphValue>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            out_v: out_v.into(),
            in_v: in_v.into(),
            out_v_label: None,
            in_v_label: None,
            properties: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &GraphValue {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<GraphValue>) -> Self {
        self.set_property(Property::new(key, value));
        self
    }

    /// Edge properties are single-valued: setting an existing key replaces it.
    pub fn set_property(&mut self, property: Property) {
        self.properties.insert(property.key.clone(), property);
    }

    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Reference vertex for the head of the edge (id and label only).
    pub fn in_vertex(&self) -> Vertex {
        reference_vertex(&self.in_v, self.in_v_label.as_deref())
    }

    /// Reference vertex for the tail of the edge (id and label only).
    pub fn out_vertex(&self) -> Vertex {
        reference_vertex(&self.out_v, self.out_v_label.as_deref())
    }
}

fn reference_vertex(id: &GraphValue, label: Option<&str>) -> Vertex {
    Vertex::with_label(id.clone(), label.unwrap_or(DEFAULT_VERTEX_LABEL))
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "e[{}][{}-{}->{}]",
            self.id, self.out_v, self.label, self.in_v
        )
    }
}

// ── Properties ──────────────────────────────────────────────────────────────

/// A vertex-level property value. Carries its own identity.
#[derive(Debug, Clone)]
pub struct VertexProperty {
    pub id: GraphValue,
    pub label: String,
    pub value: GraphValue,
}

impl VertexProperty {
    pub fn new(
        id: impl Into<GraphValue>,
        label: impl Into<String>,
        value: impl Into<GraphValue>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> &GraphValue {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Alias of [`VertexProperty::label`].
    pub fn key(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &GraphValue {
        &self.value
    }
}

impl PartialEq for VertexProperty {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VertexProperty {}

impl Hash for VertexProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for VertexProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vp[{}->{}]", self.label, self.value)
    }
}

/// An edge-level key/value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: GraphValue,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<GraphValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &GraphValue {
        &self.value
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p[{}->{}]", self.key, self.value)
    }
}
