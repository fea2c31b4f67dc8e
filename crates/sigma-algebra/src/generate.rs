use std::fmt::Debug;

use sigma_core::{AlgebraOpts, ErrorInfo, SigmaError};
use tracing::debug;

use crate::encode::encode;
use crate::partition::partition_columns;
use crate::{Family, Subset};

/// Returns the algebra generated by `family`, bounded only by the word size.
pub fn generate_algebra<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
) -> Result<Family<T>, SigmaError>
where
    T: Ord + Clone + Debug,
{
    generate_algebra_with(family, universe, &AlgebraOpts::unbounded())
}

fn check_class_bound(k: usize, opts: &AlgebraOpts) -> Result<(), SigmaError> {
    if k <= opts.max_classes && k < usize::BITS as usize {
        return Ok(());
    }
    let info = ErrorInfo::new(
        "too-many-classes",
        "generated algebra would exceed the configured enumeration bound",
    )
    .with_context("classes", k.to_string())
    .with_context("max_classes", opts.max_classes.to_string())
    .with_hint("raise AlgebraOpts::max_classes or coarsen the family");
    Err(SigmaError::Limit(info))
}

/// Returns the smallest algebra over the universe containing every member of `family`.
///
/// Every member of the result is a union of equivalence classes, so the
/// algebra is enumerated by the bitmasks `0..2^k` over the `k` classes. The
/// empty mask yields the empty set and the full mask yields the universe.
pub fn generate_algebra_with<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
    opts: &AlgebraOpts,
) -> Result<Family<T>, SigmaError>
where
    T: Ord + Clone + Debug,
{
    let encoding = encode(family, universe)?;
    let classes = partition_columns(&encoding.matrix);
    let k = classes.len();
    check_class_bound(k, opts)?;

    let blocks: Vec<Vec<T>> = (0..k)
        .map(|class| {
            classes
                .members(class)
                .iter()
                .filter_map(|&col| encoding.universe.element(col).cloned())
                .collect()
        })
        .collect();

    let mut algebra = Family::new();
    for mask in 0..(1usize << k) {
        let subset: Subset<T> = blocks
            .iter()
            .enumerate()
            .filter(|(class, _)| (mask >> class) & 1 == 1)
            .flat_map(|(_, block)| block.iter().cloned())
            .collect();
        algebra.insert(subset);
    }

    debug!(
        universe = encoding.universe.len(),
        generators = family.len(),
        classes = k,
        size = algebra.len(),
        "generated algebra"
    );
    Ok(algebra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bound_admits_twenty_classes() {
        let opts = AlgebraOpts::default();
        assert!(check_class_bound(20, &opts).is_ok());
        let err = check_class_bound(21, &opts).unwrap_err();
        assert_eq!(err.code(), "too-many-classes");
        assert_eq!(err.info().context.get("classes").map(String::as_str), Some("21"));
    }

    #[test]
    fn unbounded_opts_stop_at_the_word_size() {
        let opts = AlgebraOpts::unbounded();
        assert!(check_class_bound(21, &opts).is_ok());
        assert!(check_class_bound(usize::BITS as usize - 1, &opts).is_ok());
        assert!(check_class_bound(usize::BITS as usize, &opts).is_err());
    }
}
