use std::fmt::Debug;

use sigma_core::SigmaError;
use tracing::{debug, trace};

use crate::encode::{encode, resolve_universe};
use crate::partition::partition_columns;
use crate::{Family, Subset};

struct LawCheck {
    law_holds: bool,
    has_empty: bool,
    has_universe: bool,
}

fn check_law<T>(family: &Family<T>, universe: Option<&Subset<T>>) -> Result<LawCheck, SigmaError>
where
    T: Ord + Clone + Debug,
{
    let encoding = encode(family, universe)?;
    let k = partition_columns(&encoding.matrix).len();

    let has_empty = family.contains(&Subset::new());
    let has_universe = family.contains(&encoding.universe.to_set());

    // m + 2 == 2^k with m = |F| - [∅ ∈ F] - [X ∈ F], rearranged to stay unsigned.
    let law_holds = match u32::try_from(k).ok().and_then(|k| 1usize.checked_shl(k)) {
        Some(size) => {
            family.len() + 2 == size + usize::from(has_empty) + usize::from(has_universe)
        }
        None => false,
    };

    debug!(
        members = family.len(),
        classes = k,
        has_empty,
        has_universe,
        law_holds,
        "checked cardinality law"
    );
    Ok(LawCheck {
        law_holds,
        has_empty,
        has_universe,
    })
}

/// Returns whether `family` together with ∅ and the universe is closed.
///
/// Counts the members other than ∅ and X as `m` and the column classes of
/// the family as `k`; the law is `m + 2 == 2^k`. Runs in `O(|F|·|X|)`.
pub fn cardinality_law_holds<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
) -> Result<bool, SigmaError>
where
    T: Ord + Clone + Debug,
{
    Ok(check_law(family, universe)?.law_holds)
}

/// Returns whether `family` is an algebra of sets, via the cardinality law.
///
/// The law only certifies `F ∪ {∅, X}`, so ∅ and X must also be members.
pub fn is_algebra<T>(family: &Family<T>, universe: Option<&Subset<T>>) -> Result<bool, SigmaError>
where
    T: Ord + Clone + Debug,
{
    let check = check_law(family, universe)?;
    Ok(check.law_holds && check.has_empty && check.has_universe)
}

/// Returns whether `family` is an algebra of sets, by checking closure directly.
///
/// Over a finite universe, closure under complement and pairwise union is
/// enough. The empty family is rejected since it lacks ∅ and X. Runs in
/// `O(|F|²)` set operations.
pub fn is_algebra_brute<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
) -> Result<bool, SigmaError>
where
    T: Ord + Clone + Debug,
{
    let universe = resolve_universe(family, universe)?;
    if family.is_empty() {
        debug!("empty family is not an algebra");
        return Ok(false);
    }

    for first in family {
        let complement: Subset<T> = universe.difference(first).cloned().collect();
        if !family.contains(&complement) {
            trace!(subset = ?first, "complement missing");
            return Ok(false);
        }
        for second in family {
            let union: Subset<T> = first.union(second).cloned().collect();
            if !family.contains(&union) {
                trace!(first = ?first, second = ?second, "union missing");
                return Ok(false);
            }
        }
    }
    debug!(members = family.len(), "closure verified");
    Ok(true)
}
