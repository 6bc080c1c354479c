//! [`Extension`]: carrier for values of caller-registered custom tags.

use std::fmt;

use serde_json::Value;

/// A value whose type is not part of the built-in graph model.
///
/// Custom decoders produce an [`Extension`] and custom encoders are looked up
/// by its `type_name`. The payload stays as an untyped JSON tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    pub type_name: String,
    pub value: Value,
}

impl Extension {
    pub fn new(type_name: impl Into<String>, value: Value) -> Self {
        Self {
            type_name: type_name.into(),
            value,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name, self.value)
    }
}
