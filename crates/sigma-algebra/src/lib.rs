#![deny(missing_docs)]
#![doc = "Finite sigma-algebras: generation from a family of subsets, two independent verifiers and atom extraction."]

use std::collections::BTreeSet;

/// Atom extraction for candidate algebras.
pub mod atoms;
/// Membership-matrix encoding of a family over a universe.
pub mod encode;
/// Enumeration of the algebra generated by a family.
pub mod generate;
/// Canonical hashing helpers for families.
pub mod hash;
/// Column equivalence classes of a membership matrix.
pub mod partition;
/// Power-set enumeration.
pub mod powerset;
/// Deterministic random family sampling.
pub mod sample;
/// Serialization routines for JSON and binary round-trips.
pub mod serde;
/// Serializable summaries of a family and the algebra it generates.
pub mod summary;
/// Cardinality-law and brute-force closure checks.
pub mod verify;

pub use self::serde::{from_bytes, from_json, to_bytes, to_json};
pub use atoms::{atoms, atoms_with};
pub use encode::{encode, Encoding, MembershipMatrix, Universe};
pub use generate::{generate_algebra, generate_algebra_with};
pub use hash::canonical_family_hash;
pub use partition::{partition_columns, ColumnPattern, EquivalenceClasses};
pub use powerset::powerset;
pub use sample::{full_universe, random_family, substream_rng};
pub use sigma_core::{AlgebraOpts, ErrorInfo, SigmaError};
pub use summary::{summarize, AlgebraSummary};
pub use verify::{cardinality_law_holds, is_algebra, is_algebra_brute};

/// A finite subset of the universe.
pub type Subset<T> = BTreeSet<T>;

/// A finite family of distinct subsets.
pub type Family<T> = BTreeSet<Subset<T>>;
