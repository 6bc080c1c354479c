//! GraphSON codec error type.

use gremlin_structure::ValueKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphSONError {
    /// Input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The tag has no decoder in the registry.
    #[error("unknown type tag `{0}`")]
    UnknownType(String),
    /// An object carries `@type` but is not a well-formed envelope.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    /// The payload does not have the shape the tag's decoder expects.
    #[error("type mismatch for `{tag}`: expected {expected}, found {found}")]
    TypeMismatch {
        tag: String,
        expected: String,
        found: String,
    },
    /// The writer has no encoder for the value and no plain JSON form.
    #[error("no encoder registered for {0}")]
    UnsupportedType(ValueKind),
}

pub type Result<T> = std::result::Result<T, GraphSONError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matrix() {
        let cases: Vec<(GraphSONError, &str)> = vec![
            (
                GraphSONError::UnknownType("g:Frobnicate".into()),
                "unknown type tag `g:Frobnicate`",
            ),
            (
                GraphSONError::MalformedEnvelope("missing `@value`".into()),
                "malformed envelope: missing `@value`",
            ),
            (
                GraphSONError::TypeMismatch {
                    tag: "g:Int32".into(),
                    expected: "32-bit integer".into(),
                    found: "string \"x\"".into(),
                },
                "type mismatch for `g:Int32`: expected 32-bit integer, found string \"x\"",
            ),
            (
                GraphSONError::UnsupportedType(ValueKind::Extension("uuid".into())),
                "no encoder registered for extension `uuid`",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected, "mismatch for {err:?}");
        }
    }

    #[test]
    fn parse_error_converts_from_serde() {
        let err: GraphSONError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, GraphSONError::Parse(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
