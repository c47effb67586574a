//! # Error Types — Validation and Codec Failures
//!
//! The two error families owned by this crate. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors name the violating field and, for parse failures, the
//!   offending input, so boundary code can surface them verbatim.
//! - Codec errors are always recoverable: decoding bytes that were not
//!   produced by `codec::encode()` yields a structured error, never a panic,
//!   so the service layer can translate it into a corrupt-record condition.

use thiserror::Error;

/// Rejection of an input that fails the entity invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Asset identifiers must be non-empty.
    #[error("asset id must not be empty")]
    EmptyAssetId,

    /// Owner identifiers must be non-empty.
    #[error("owner must not be empty")]
    EmptyOwner,

    /// Principal identifiers must be non-empty.
    #[error("principal must not be empty")]
    EmptyPrincipal,

    /// The value argument is not a whole base-10 integer.
    #[error("value is not a base-10 integer: {input:?}")]
    UnparsableValue {
        /// The string that failed to parse.
        input: String,
    },
}

/// Failure to encode or decode an asset record.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Canonical JSON serialization failed.
    #[error("asset encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The byte sequence is not a well-formed asset record.
    #[error("asset decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The record parsed but violates an entity invariant.
    #[error("decoded record is invalid: {0}")]
    InvalidRecord(#[from] ValidationError),
}
