/// Options for decoding WKB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WKBReadOptions {
    /// How deeply GeometryCollections may nest inside one another.
    ///
    /// A collection at the top level has depth 1. Input that nests deeper fails with
    /// [`WKBError::UnsupportedValue`][crate::error::WKBError::UnsupportedValue].
    pub max_nesting_depth: usize,

    /// Whether bytes left over after the top-level geometry are accepted.
    ///
    /// When `false`, leftovers fail with
    /// [`WKBError::InvalidStorage`][crate::error::WKBError::InvalidStorage].
    pub allow_trailing_bytes: bool,
}

impl WKBReadOptions {
    pub fn new(max_nesting_depth: usize, allow_trailing_bytes: bool) -> Self {
        Self {
            max_nesting_depth,
            allow_trailing_bytes,
        }
    }
}

impl Default for WKBReadOptions {
    fn default() -> Self {
        Self::new(256, true)
    }
}
