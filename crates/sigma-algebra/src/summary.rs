use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use sigma_core::SigmaError;

use crate::encode::encode;
use crate::partition::partition_columns;
use crate::verify::is_algebra;
use crate::{Family, Subset};

/// Structured description of a family and the algebra it generates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AlgebraSummary {
    /// Number of elements in the resolved universe.
    pub universe_size: usize,
    /// Number of distinct members of the family.
    pub family_size: usize,
    /// Number of column equivalence classes `k`.
    pub num_classes: usize,
    /// Universe indices of each class, in class order.
    pub classes: Vec<Vec<usize>>,
    /// Size `2^k` of the generated algebra, when it fits in a `u64`.
    pub generated_size: Option<u64>,
    /// Whether the family already is an algebra.
    pub is_algebra: bool,
}

/// Summarizes `family` without enumerating the algebra it generates.
pub fn summarize<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
) -> Result<AlgebraSummary, SigmaError>
where
    T: Ord + Clone + Debug,
{
    let encoding = encode(family, universe)?;
    let classes = partition_columns(&encoding.matrix);
    let num_classes = classes.len();
    let generated_size = u32::try_from(num_classes)
        .ok()
        .and_then(|k| 1u64.checked_shl(k));
    Ok(AlgebraSummary {
        universe_size: encoding.universe.len(),
        family_size: family.len(),
        num_classes,
        classes: classes.iter().map(|(_, members)| members.to_vec()).collect(),
        generated_size,
        is_algebra: is_algebra(family, universe)?,
    })
}
