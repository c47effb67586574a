//! # Ledger Error Taxonomy
//!
//! One structured error per failed operation, carrying enough context for
//! the caller to act on or log: the asset id, and for authorization
//! failures the expected versus actual identity. All variants are
//! recoverable by the caller; none are fatal to the service. The core
//! performs no retries of its own.

use thiserror::Error;

use tally_core::{AssetId, OwnerId, PrincipalId, ValidationError};

use crate::identity::IdentityError;

/// Failure of a single asset operation.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// An input failed boundary validation (empty id/owner, unparsable
    /// value, bad arity).
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A create targeted an id that already holds a record.
    #[error("asset {id} already exists")]
    AlreadyExists {
        /// The contested asset id.
        id: AssetId,
    },

    /// The asset does not exist or could not be read.
    #[error("asset {id} not found")]
    NotFound {
        /// The requested asset id.
        id: AssetId,
    },

    /// The stored record failed to decode. This signals a store/codec
    /// contract violation, not a user error.
    #[error("stored record for asset {id} is corrupt: {reason}")]
    CorruptRecord {
        /// The asset whose record is unreadable.
        id: AssetId,
        /// Decoder failure description.
        reason: String,
    },

    /// The caller is not the current owner.
    #[error("asset {id} is owned by {owner}, not caller {caller}")]
    Unauthorized {
        /// The asset the caller tried to mutate.
        id: AssetId,
        /// The recorded owner (the expected identity).
        owner: OwnerId,
        /// The resolved caller principal (the actual identity).
        caller: PrincipalId,
    },

    /// A concurrent writer won the read-then-write race. The caller may
    /// re-read and retry.
    #[error("conflicting update detected for asset {id}")]
    ConflictDetected {
        /// The contested asset id.
        id: AssetId,
    },

    /// The state store failed to read.
    #[error("store read failed for asset {id}: {reason}")]
    StoreReadFailure {
        /// The asset being read.
        id: AssetId,
        /// Store failure description.
        reason: String,
    },

    /// The state store failed to write. A write that fails after a passed
    /// precondition check is reported here, never silently ignored.
    #[error("store write failed for asset {id}: {reason}")]
    StoreWriteFailure {
        /// The asset being written.
        id: AssetId,
        /// Store failure description.
        reason: String,
    },

    /// The identity provider or resolver failed; propagated verbatim.
    #[error("identity unavailable: {0}")]
    IdentityUnavailable(#[from] IdentityError),
}
