//! Built-in encoders and decoders for the `g:` tag set.

mod graph;
mod numeric;

use gremlin_structure::ValueKind;

use crate::registry::TypeRegistry;
use crate::tags;

pub(crate) fn register_builtins(registry: &TypeRegistry) {
    registry.register_encoder(ValueKind::Int32, tags::INT32, numeric::encode_int32);
    registry.register_encoder(ValueKind::Int64, tags::INT64, numeric::encode_int64);
    registry.register_encoder(ValueKind::Float, tags::FLOAT, numeric::encode_float);
    registry.register_encoder(ValueKind::Double, tags::DOUBLE, numeric::encode_double);
    registry.register_encoder(ValueKind::Vertex, tags::VERTEX, graph::encode_vertex);
    registry.register_encoder(ValueKind::Edge, tags::EDGE, graph::encode_edge);
    registry.register_encoder(
        ValueKind::VertexProperty,
        tags::VERTEX_PROPERTY,
        graph::encode_vertex_property,
    );
    registry.register_encoder(ValueKind::Property, tags::PROPERTY, graph::encode_property);

    // Booleans are written untagged but the tagged form is still accepted.
    registry.register_decoder(tags::INT32, numeric::decode_int32);
    registry.register_decoder(tags::INT64, numeric::decode_int64);
    registry.register_decoder(tags::FLOAT, numeric::decode_float);
    registry.register_decoder(tags::DOUBLE, numeric::decode_double);
    registry.register_decoder(tags::BOOLEAN, numeric::decode_boolean);
    registry.register_decoder(tags::VERTEX, graph::decode_vertex);
    registry.register_decoder(tags::EDGE, graph::decode_edge);
    registry.register_decoder(tags::VERTEX_PROPERTY, graph::decode_vertex_property);
    registry.register_decoder(tags::PROPERTY, graph::decode_property);
}
