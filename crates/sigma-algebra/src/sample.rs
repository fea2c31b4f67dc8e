use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use siphasher::sip::SipHasher13;

use crate::{Family, Subset};

/// Returns a generator for one substream of a master seed.
///
/// The substream seed is SipHash-1-3 of `(master_seed, substream)` under zero
/// keys, so a seed reproduces the same families on every platform.
pub fn substream_rng(master_seed: u64, substream: u64) -> StdRng {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    StdRng::seed_from_u64(hasher.finish())
}

/// Draws a random family of subsets of `0..universe_size`.
///
/// Each of the `draws` subsets contains every element independently with
/// probability one half. Duplicate draws collapse, so the family may hold
/// fewer than `draws` members.
pub fn random_family<R>(universe_size: u32, draws: usize, rng: &mut R) -> Family<u32>
where
    R: Rng + ?Sized,
{
    (0..draws)
        .map(|_| {
            (0..universe_size)
                .filter(|_| rng.gen_bool(0.5))
                .collect::<Subset<u32>>()
        })
        .collect()
}

/// Returns the universe `0..universe_size`.
pub fn full_universe(universe_size: u32) -> Subset<u32> {
    (0..universe_size).collect()
}
