use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to an indirect object inside the host document.
///
/// Mirrors the `N G R` form used by PDF cross-reference tables: an object
/// number plus a generation. Handles are only meaningful within the document
/// that allocated them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Object number, starting at 1.
    pub number: u32,
    /// Generation number. Freshly written objects use generation 0.
    pub generation: u16,
}

impl ObjectRef {
    /// Create a reference with explicit values.
    pub const fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({} {})", self.number, self.generation)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}
