use serde::Serialize;
use sha2::{Digest, Sha256};
use sigma_core::{ErrorInfo, SigmaError};

use crate::Family;

/// Computes the canonical SHA-256 hash of a family.
///
/// Members are visited in sorted order and every member and element is
/// length-prefixed, so logically equal families hash identically.
pub fn canonical_family_hash<T>(family: &Family<T>) -> Result<String, SigmaError>
where
    T: Serialize,
{
    let mut hasher = Sha256::new();
    hasher.update((family.len() as u64).to_le_bytes());
    for member in family {
        hasher.update((member.len() as u64).to_le_bytes());
        for element in member {
            let bytes = serde_json::to_vec(element)
                .map_err(|err| SigmaError::Serde(ErrorInfo::new("family-hash", err.to_string())))?;
            hasher.update((bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }
    }
    Ok(hex::encode(hasher.finalize()))
}
