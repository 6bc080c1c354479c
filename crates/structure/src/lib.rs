//! Graph structure model consumed and produced by the GraphSON codec.
//!
//! The codec populates these types through their public constructors and
//! accessors; no traversal or storage logic lives here.

mod element;
mod extension;
mod value;

pub use element::{
    Edge, Property, Vertex, VertexProperty, DEFAULT_EDGE_LABEL, DEFAULT_VERTEX_LABEL,
};
pub use extension::Extension;
pub use value::{GraphValue, ValueKind};

pub use indexmap::IndexMap;
