use itertools::Itertools;

use crate::Subset;

/// Enumerates every subset of `set` exactly once.
///
/// Subsets come in order of increasing size, so the empty set is first and
/// `set` itself is last.
pub fn powerset<T>(set: &Subset<T>) -> impl Iterator<Item = Subset<T>> + '_
where
    T: Ord + Clone,
{
    set.iter()
        .cloned()
        .powerset()
        .map(|subset| subset.into_iter().collect())
}

/// Enumerates the subsets of `set` other than the empty set and `set` itself.
pub(crate) fn proper_nonempty_subsets<T>(set: &Subset<T>) -> impl Iterator<Item = Subset<T>> + '_
where
    T: Ord + Clone,
{
    let total = set.len();
    powerset(set).filter(move |subset| !subset.is_empty() && subset.len() < total)
}
