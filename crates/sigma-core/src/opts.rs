//! Options bounding the exponential enumerations.

use serde::{Deserialize, Serialize};

/// Limits applied by algebra generation and atom extraction.
///
/// Generation enumerates `2^k` subsets for `k` equivalence classes and atom
/// extraction enumerates `2^n` subsets of every candidate of size `n`. Both
/// bounds are checked before any enumeration starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgebraOpts {
    /// Largest number of equivalence classes a generator may expand.
    pub max_classes: usize,
    /// Largest candidate member whose subsets atom extraction may enumerate.
    pub max_atom_size: usize,
}

impl Default for AlgebraOpts {
    fn default() -> Self {
        Self {
            max_classes: 20,
            max_atom_size: 20,
        }
    }
}

impl AlgebraOpts {
    /// Returns options without practical bounds (limited only by word size).
    pub fn unbounded() -> Self {
        Self {
            max_classes: usize::BITS as usize - 1,
            max_atom_size: usize::BITS as usize - 1,
        }
    }
}
