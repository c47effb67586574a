//! # Asset Codec — Canonical Record Bytes
//!
//! Serializes assets to the byte representation held by the state store and
//! back. Encoding is compact JSON with a fixed field order (`id`, `owner`,
//! `value`), so the same asset always encodes to the same bytes and queries
//! that re-encode a decoded record return exactly what was stored. Full
//! `i64` values round-trip exactly; this is why the record format is plain
//! JSON rather than RFC 8785, whose number formatting is bounded by IEEE
//! doubles.
//!
//! ## Invariants
//!
//! - `decode(encode(a)) == a` for every valid asset.
//! - Decoding bytes not produced by `encode` fails with a structured
//!   [`CodecError`], never a panic. The service layer translates that into
//!   its corrupt-record condition.
//! - Decoded records are re-validated: an empty `id` or `owner` in the
//!   stored bytes is a contract violation and fails the decode.

use crate::asset::Asset;
use crate::error::{CodecError, ValidationError};

/// Encode an asset into canonical record bytes.
///
/// # Errors
///
/// Returns `CodecError::Encode` if serialization fails. For a well-formed
/// [`Asset`] this does not happen in practice; the error path exists so the
/// service never panics on behalf of the store.
pub fn encode(asset: &Asset) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(asset).map_err(CodecError::Encode)
}

/// Decode record bytes into an asset, re-validating entity invariants.
///
/// # Errors
///
/// Returns `CodecError::Decode` for bytes that are not a well-formed record,
/// and `CodecError::InvalidRecord` for records that parse but violate the
/// non-empty invariants on `id` or `owner`.
pub fn decode(bytes: &[u8]) -> Result<Asset, CodecError> {
    let asset: Asset = serde_json::from_slice(bytes).map_err(CodecError::Decode)?;
    validate(&asset)?;
    Ok(asset)
}

/// Re-check the entity invariants on a decoded record.
///
/// Deserialized identifiers bypass the validating constructors (the newtypes
/// are serde-transparent), so the non-empty invariants are enforced here.
fn validate(asset: &Asset) -> Result<(), ValidationError> {
    if asset.id.as_str().is_empty() {
        return Err(ValidationError::EmptyAssetId);
    }
    if asset.owner.as_str().is_empty() {
        return Err(ValidationError::EmptyOwner);
    }
    Ok(())
}
