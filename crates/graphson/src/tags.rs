//! Wire tag vocabulary.

/// Namespace of every built-in tag.
pub const NAMESPACE: &str = "g";

/// Envelope key holding the tag.
pub const TYPE_KEY: &str = "@type";
/// Envelope key holding the payload.
pub const VALUE_KEY: &str = "@value";

pub const INT32: &str = "g:Int32";
pub const INT64: &str = "g:Int64";
pub const FLOAT: &str = "g:Float";
pub const DOUBLE: &str = "g:Double";
pub const BOOLEAN: &str = "g:Boolean";
pub const VERTEX: &str = "g:Vertex";
pub const EDGE: &str = "g:Edge";
pub const VERTEX_PROPERTY: &str = "g:VertexProperty";
pub const PROPERTY: &str = "g:Property";

/// Every tag the built-in registry can decode.
pub const BUILTIN: &[&str] = &[
    INT32,
    INT64,
    FLOAT,
    DOUBLE,
    BOOLEAN,
    VERTEX,
    EDGE,
    VERTEX_PROPERTY,
    PROPERTY,
];

/// Builds a tag in the `g` namespace, e.g. `qualify("UUID") == "g:UUID"`.
pub fn qualify(type_name: &str) -> String {
    format!("{NAMESPACE}:{type_name}")
}

/// Splits a tag into `(namespace, type name)`. Returns `None` for tags
/// without a namespace separator.
pub fn split(tag: &str) -> Option<(&str, &str)> {
    tag.split_once(':')
}
