//! # State Store Contract
//!
//! The abstract key-value ledger the asset service writes through. The
//! hosting runtime provides the real implementation; [`crate::MemoryStore`]
//! is the in-process reference used by tests and embedders.
//!
//! ## Versioned Writes
//!
//! `get` returns the record bytes together with a monotonically increasing
//! per-key version. `put` carries an [`Expected`] precondition:
//!
//! - `Expected::Absent` — the key must not exist (creation).
//! - `Expected::Version(v)` — the key must currently be at version `v`
//!   (read-modify-write).
//!
//! A failed expectation is [`StoreError::Conflict`]. This is the
//! optimistic-concurrency contract that guarantees two concurrent transfers
//! of the same asset cannot both succeed with stale ownership data. Stores
//! that already serialize conflicting operations per key can satisfy the
//! contract trivially.
//!
//! No delete, scan, or range operation is part of the contract; the asset
//! core consumes none.

use thiserror::Error;

/// A stored record together with its per-key version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedRecord {
    /// The record bytes as written.
    pub bytes: Vec<u8>,
    /// Version of the record; increases by one on every overwrite.
    pub version: u64,
}

/// Precondition attached to a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The key must not currently exist.
    Absent,
    /// The key must currently hold the given version.
    Version(u64),
}

/// Failure surfaced by a state store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The read could not be performed.
    #[error("store read failed for key {key:?}: {reason}")]
    ReadFailed {
        /// The key being read.
        key: String,
        /// Implementation-specific failure description.
        reason: String,
    },

    /// The write could not be performed.
    #[error("store write failed for key {key:?}: {reason}")]
    WriteFailed {
        /// The key being written.
        key: String,
        /// Implementation-specific failure description.
        reason: String,
    },

    /// The write's [`Expected`] precondition did not hold.
    #[error("conflicting write detected for key {key:?}")]
    Conflict {
        /// The contested key.
        key: String,
    },
}

/// Abstract key-value store keyed by asset id.
///
/// Implementations must be `Send + Sync`; the hosting runtime may invoke
/// operations concurrently against the same shared store. The trait is
/// object-safe so the service can hold it behind an `Arc<dyn StateStore>`.
pub trait StateStore: Send + Sync {
    /// Read the current record under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<VersionedRecord>, StoreError>;

    /// Write `bytes` under `key`, subject to the `expected` precondition.
    fn put(&self, key: &str, bytes: Vec<u8>, expected: Expected) -> Result<(), StoreError>;
}
