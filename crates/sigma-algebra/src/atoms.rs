use std::fmt::Debug;

use sigma_core::{AlgebraOpts, ErrorInfo, SigmaError};
use tracing::{debug, trace};

use crate::encode::encode;
use crate::powerset::proper_nonempty_subsets;
use crate::{Family, Subset};

/// Returns the atoms of `family`, bounded only by the word size.
pub fn atoms<T>(family: &Family<T>, universe: Option<&Subset<T>>) -> Result<Family<T>, SigmaError>
where
    T: Ord + Clone + Debug,
{
    atoms_with(family, universe, &AlgebraOpts::unbounded())
}

/// Returns the minimal nonempty members of `family`.
///
/// A nonempty member is an atom iff none of its proper nonempty subsets is a
/// member. Minimality is checked by enumerating those subsets smallest first
/// and stopping at the first member found, so only atoms pay for a full scan.
/// A candidate whose scan passes `2^max_atom_size` subsets without a hit
/// fails with `subset-too-large`.
pub fn atoms_with<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
    opts: &AlgebraOpts,
) -> Result<Family<T>, SigmaError>
where
    T: Ord + Clone + Debug,
{
    if family.is_empty() {
        let info = ErrorInfo::new("empty-family", "atom extraction requires a nonempty family")
            .with_hint("pass a candidate algebra such as the output of generate_algebra");
        return Err(SigmaError::TypeValidation(info));
    }
    let encoding = encode(family, universe)?;

    let budget = u32::try_from(opts.max_atom_size)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .unwrap_or(usize::MAX);

    let mut atoms = Family::new();
    for candidate in family.iter().filter(|member| !member.is_empty()) {
        let mut minimal = true;
        for (scanned, subset) in proper_nonempty_subsets(candidate).enumerate() {
            if scanned >= budget {
                let info = ErrorInfo::new(
                    "subset-too-large",
                    "member is too large for exhaustive subset enumeration",
                )
                .with_context("size", candidate.len().to_string())
                .with_context("max_atom_size", opts.max_atom_size.to_string());
                return Err(SigmaError::Limit(info));
            }
            if family.contains(&subset) {
                minimal = false;
                break;
            }
        }
        trace!(candidate = ?candidate, minimal, "atom candidate");
        if minimal {
            atoms.insert(candidate.clone());
        }
    }

    debug!(
        universe = encoding.universe.len(),
        members = family.len(),
        atoms = atoms.len(),
        "extracted atoms"
    );
    Ok(atoms)
}
