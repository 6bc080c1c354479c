//! Type registry: the two dispatch tables behind the writer and the reader.
//!
//! Encoders are keyed by [`ValueKind`] and carry the tag they write;
//! decoders are keyed by tag. Re-registering a key overwrites the previous
//! entry, which is how callers replace built-ins.
//!
//! Both maps sit behind a single [`RwLock`]. Lookups clone the function
//! handle out and drop the guard before it is invoked, so recursive decoding
//! never holds the lock and concurrent encode/decode calls only contend on
//! the brief lookup itself.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gremlin_structure::{GraphValue, ValueKind};
use serde_json::Value;
use tracing::debug;

use crate::codecs;
use crate::error::Result;
use crate::reader::GraphSONReader;
use crate::writer::GraphSONWriter;

/// Produces the `@value` payload for a value. The writer is passed in for
/// recursive encoding of nested values.
pub type EncodeFn = Arc<dyn Fn(&GraphValue, &GraphSONWriter<'_>) -> Result<Value> + Send + Sync>;

/// Rebuilds a native value from an `@value` payload. The reader is passed in
/// for recursive decoding of nested values.
pub type DecodeFn = Arc<dyn Fn(&Value, &GraphSONReader<'_>) -> Result<GraphValue> + Send + Sync>;

#[derive(Clone)]
struct EncoderEntry {
    tag: String,
    encode: EncodeFn,
}

#[derive(Default)]
struct RegistryInner {
    encoders: HashMap<ValueKind, EncoderEntry>,
    decoders: HashMap<String, DecodeFn>,
}

/// Extensible mapping between native kinds, tags and their codecs.
pub struct TypeRegistry {
    inner: RwLock<RegistryInner>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl TypeRegistry {
    /// A registry with no entries at all.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
        }
    }

    /// A registry holding the built-in `g:` tags.
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        registry.register_builtins();
        registry
    }

    /// Process-wide registry, populated with the built-ins on first access.
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TypeRegistry::with_builtins)
    }

    /// (Re-)installs the built-in codecs, overwriting any overrides.
    pub fn register_builtins(&self) {
        codecs::register_builtins(self);
    }

    pub fn register_encoder<F>(&self, kind: ValueKind, tag: impl Into<String>, encode: F)
    where
        F: Fn(&GraphValue, &GraphSONWriter<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        let tag = tag.into();
        let entry = EncoderEntry {
            tag: tag.clone(),
            encode: Arc::new(encode),
        };
        let replaced = self.write().encoders.insert(kind.clone(), entry);
        debug!(
            %kind,
            %tag,
            overwrite = replaced.is_some(),
            "registered GraphSON encoder"
        );
    }

    pub fn register_decoder<F>(&self, tag: impl Into<String>, decode: F)
    where
        F: Fn(&Value, &GraphSONReader<'_>) -> Result<GraphValue> + Send + Sync + 'static,
    {
        let tag = tag.into();
        let replaced = self
            .write()
            .decoders
            .insert(tag.clone(), Arc::new(decode));
        debug!(%tag, overwrite = replaced.is_some(), "registered GraphSON decoder");
    }

    /// Encoder for the exact kind of `value`, with the tag it writes.
    pub fn encoder_for(&self, value: &GraphValue) -> Option<(String, EncodeFn)> {
        self.read()
            .encoders
            .get(&value.kind())
            .map(|entry| (entry.tag.clone(), Arc::clone(&entry.encode)))
    }

    pub fn decoder_for(&self, tag: &str) -> Option<DecodeFn> {
        self.read().decoders.get(tag).map(Arc::clone)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.read().decoders.contains_key(tag)
    }

    /// Tags with a registered decoder, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.read().decoders.keys().cloned().collect();
        tags.sort();
        tags
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        let mut encoders: Vec<String> = inner
            .encoders
            .iter()
            .map(|(kind, entry)| format!("{kind} => {}", entry.tag))
            .collect();
        encoders.sort();
        let mut decoders: Vec<&String> = inner.decoders.keys().collect();
        decoders.sort();
        f.debug_struct("TypeRegistry")
            .field("encoders", &encoders)
            .field("decoders", &decoders)
            .finish()
    }
}
