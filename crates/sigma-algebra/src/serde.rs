use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sigma_core::{ErrorInfo, SchemaVersion, SigmaError};

use crate::hash::canonical_family_hash;
use crate::Family;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableFamily<T> {
    schema_version: SchemaVersion,
    family_hash: String,
    members: Vec<Vec<T>>,
}

fn serde_error(code: &str, err: impl ToString) -> SigmaError {
    SigmaError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn to_payload<T>(family: &Family<T>) -> Result<SerializableFamily<T>, SigmaError>
where
    T: Ord + Clone + Serialize,
{
    Ok(SerializableFamily {
        schema_version: SchemaVersion::default(),
        family_hash: canonical_family_hash(family)?,
        members: family
            .iter()
            .map(|member| member.iter().cloned().collect())
            .collect(),
    })
}

fn from_payload<T>(payload: SerializableFamily<T>) -> Result<Family<T>, SigmaError>
where
    T: Ord + Serialize,
{
    let current = SchemaVersion::default();
    if !current.is_compatible_with(&payload.schema_version) {
        let info = ErrorInfo::new("schema-mismatch", "unsupported family schema version")
            .with_context("expected_major", current.major.to_string())
            .with_context("found_major", payload.schema_version.major.to_string());
        return Err(SigmaError::Serde(info));
    }
    let family: Family<T> = payload
        .members
        .into_iter()
        .map(|member| member.into_iter().collect::<BTreeSet<T>>())
        .collect();
    let hash = canonical_family_hash(&family)?;
    if hash != payload.family_hash {
        let info = ErrorInfo::new("hash-mismatch", "family does not match its recorded hash")
            .with_context("expected", payload.family_hash)
            .with_context("computed", hash);
        return Err(SigmaError::Serde(info));
    }
    Ok(family)
}

/// Serializes a family to a JSON string.
pub fn to_json<T>(family: &Family<T>) -> Result<String, SigmaError>
where
    T: Ord + Clone + Serialize,
{
    let payload = to_payload(family)?;
    serde_json::to_string_pretty(&payload).map_err(|err| serde_error("json-serialize", err))
}

/// Restores a family from a JSON string.
pub fn from_json<T>(data: &str) -> Result<Family<T>, SigmaError>
where
    T: Ord + Serialize + DeserializeOwned,
{
    let payload: SerializableFamily<T> =
        serde_json::from_str(data).map_err(|err| serde_error("json-deserialize", err))?;
    from_payload(payload)
}

/// Serializes a family into a binary blob.
pub fn to_bytes<T>(family: &Family<T>) -> Result<Vec<u8>, SigmaError>
where
    T: Ord + Clone + Serialize,
{
    let payload = to_payload(family)?;
    bincode::serialize(&payload).map_err(|err| serde_error("bincode-serialize", err))
}

/// Rehydrates a family from a binary blob.
pub fn from_bytes<T>(bytes: &[u8]) -> Result<Family<T>, SigmaError>
where
    T: Ord + Serialize + DeserializeOwned,
{
    let payload: SerializableFamily<T> =
        bincode::deserialize(bytes).map_err(|err| serde_error("bincode-deserialize", err))?;
    from_payload(payload)
}
