//! Error type for indexed component access.

use std::fmt;

/// Error returned when a component index is outside a vector's axis range.
///
/// This is the only error the vector types produce. Degenerate geometry
/// (near-zero normalization, zero-length move targets, acos overshoot)
/// resolves to defined fallback values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Number of components on the accessed vector.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid vector index {} for {}-component vector",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}
