#![allow(dead_code)]

use sigma_algebra::{Family, Subset};

pub fn set(elements: &[u32]) -> Subset<u32> {
    elements.iter().copied().collect()
}

pub fn family(members: &[&[u32]]) -> Family<u32> {
    members.iter().map(|member| set(member)).collect()
}
