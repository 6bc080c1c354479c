//! GraphSON: a self-describing, type-tagged JSON codec for graph values.
//!
//! Tagged values travel as `{"@type": "g:Int32", "@value": 1}` envelopes.
//! The [`GraphSONWriter`] picks an encoder by the value's [`ValueKind`], the
//! [`GraphSONReader`] picks a decoder by the envelope's tag, and both draw
//! from a shared [`TypeRegistry`] that callers can extend at runtime.
//!
//! ```
//! use gremlin_graphson::{read_object, write_object, GraphValue};
//!
//! let text = write_object(&GraphValue::Int64(2)).unwrap();
//! assert_eq!(text, r#"{"@type":"g:Int64","@value":2}"#);
//! assert_eq!(read_object(&text).unwrap(), GraphValue::Int64(2));
//! ```

mod codecs;
pub mod error;
pub mod json;
pub mod options;
pub mod reader;
pub mod registry;
pub mod tags;
pub mod writer;

pub use error::{GraphSONError, Result};
pub use options::{ReaderOptions, WriterOptions};
pub use reader::{read_object, GraphSONReader};
pub use registry::{DecodeFn, EncodeFn, TypeRegistry};
pub use writer::{write_object, GraphSONWriter};

pub use gremlin_structure::{
    Edge, Extension, GraphValue, IndexMap, Property, ValueKind, Vertex, VertexProperty,
};
