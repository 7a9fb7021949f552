//! Change detection by content fingerprint
//!
//! An entity's fingerprint is the SHA-256 of the canonical JSON encoding of
//! every declared field (keys sorted). It is stored on the entity after each
//! read from or write to the store; a mismatch means unsaved changes.
//!
//! ## Determinism Guarantees
//!
//! - Same field values → same fingerprint, regardless of declaration order
//! - The stored fingerprint never feeds into its own computation
//!
//! Equality is approximate: two different states could in principle share
//! a digest.

use crate::errors::Result;
use crate::model::{Entity, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Compute the fingerprint of an entity's current field values.
///
/// ## Errors
///
/// Returns `ModelError::Serialization` if JSON encoding fails.
pub fn compute_fingerprint<E: Entity>(entity: &E) -> Result<String> {
    let canonical: BTreeMap<&str, Value> = entity.to_map().into_iter().collect();
    let json = serde_json::to_string(&canonical)?;
    Ok(hash_string(&json))
}

/// Clear the stored fingerprint, recompute it and store it back.
pub fn rehash<E: Entity>(entity: &mut E) -> Result<()> {
    entity.record_mut().set_hash(None);
    let fingerprint = compute_fingerprint(entity)?;
    entity.record_mut().set_hash(Some(fingerprint));
    Ok(())
}

/// True when the entity differs from the state it was last synced in.
///
/// Entities that were never synced have no fingerprint and are always dirty.
pub fn is_dirty<E: Entity>(entity: &E) -> Result<bool> {
    let mut copy = entity.clone();
    copy.record_mut().set_hash(None);
    let current = compute_fingerprint(&copy)?;
    Ok(entity.hash() != Some(current.as_str()))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
