//! Reader and writer options.

/// Options for [`GraphSONWriter`](crate::GraphSONWriter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// Pretty-print the output instead of writing compact JSON.
    pub pretty: bool,
}

/// Options for [`GraphSONReader`](crate::GraphSONReader).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Reject any object with an `@type` key that is not exactly an
    /// `{"@type", "@value"}` envelope. When off, such objects with extra
    /// keys are read as plain maps.
    pub strict_envelopes: bool,
}
