//! # Asset Service
//!
//! The asset state machine: creation, query, and ownership transfer against
//! an injected [`StateStore`], with caller identity verified through an
//! injected [`IdentityProvider`] and [`PrincipalResolver`] before any
//! mutation is allowed.
//!
//! ## State machine
//!
//! ```text
//! Absent ──create──▶ Active(owner=O) ──transfer(caller=O)──▶ Active(owner=N)
//! ```
//!
//! Query is a read-only self-loop; nothing transitions back to Absent.
//!
//! ## Update protocol
//!
//! The service holds no long-lived copy of any record: every operation
//! re-reads current state before acting. Each read-then-write sequence is
//! guarded by the store's versioned-write contract, so the loser of a
//! concurrent mutation surfaces a structured error instead of clobbering
//! the winner.

use std::sync::Arc;

use tally_core::{codec, Asset, AssetId};

use crate::error::LedgerError;
use crate::identity::{IdentityProvider, PrincipalResolver};
use crate::request::{CreateAsset, QueryAsset, TransferAsset};
use crate::store::{Expected, StateStore, StoreError, VersionedRecord};

/// The core asset service.
///
/// Constructed once with its collaborators; holds no other state. Cloning
/// shares the underlying collaborators.
#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn StateStore>,
    identity: Arc<dyn IdentityProvider>,
    resolver: Arc<dyn PrincipalResolver>,
}

impl AssetService {
    /// Build the service from its injected collaborators.
    pub fn new(
        store: Arc<dyn StateStore>,
        identity: Arc<dyn IdentityProvider>,
        resolver: Arc<dyn PrincipalResolver>,
    ) -> Self {
        Self {
            store,
            identity,
            resolver,
        }
    }

    /// Create a new asset.
    ///
    /// Fails with [`LedgerError::AlreadyExists`] if the id is taken. A read
    /// failure during the existence check is surfaced as
    /// [`LedgerError::StoreReadFailure`], not treated as absence.
    pub fn create(&self, request: CreateAsset) -> Result<(), LedgerError> {
        let CreateAsset { id, owner, value } = request;

        let existing =
            self.store
                .get(id.as_str())
                .map_err(|e| LedgerError::StoreReadFailure {
                    id: id.clone(),
                    reason: e.to_string(),
                })?;
        if existing.is_some() {
            return Err(LedgerError::AlreadyExists { id });
        }

        let asset = Asset::new(id.clone(), owner, value);
        let bytes = codec::encode(&asset).map_err(|e| LedgerError::StoreWriteFailure {
            id: id.clone(),
            reason: format!("record encoding failed: {e}"),
        })?;

        match self.store.put(id.as_str(), bytes, Expected::Absent) {
            Ok(()) => {
                tracing::info!(asset = %id, owner = %asset.owner, "asset created");
                Ok(())
            }
            // Another creator won the race between our existence check and
            // the write. The id is taken either way.
            Err(StoreError::Conflict { .. }) => Err(LedgerError::AlreadyExists { id }),
            Err(e) => Err(LedgerError::StoreWriteFailure {
                id,
                reason: e.to_string(),
            }),
        }
    }

    /// Read an asset. Never mutates.
    ///
    /// An absent record and a failed read both surface as
    /// [`LedgerError::NotFound`]; the read failure itself is logged.
    pub fn query(&self, request: QueryAsset) -> Result<Asset, LedgerError> {
        let QueryAsset { id } = request;
        let record = self.read(&id)?;
        self.decode(&id, &record.bytes)
    }

    /// Transfer an asset to a new owner.
    ///
    /// The caller must be the current owner: the credential supplied by the
    /// identity provider is resolved to a principal and compared against
    /// the recorded owner. On success the record is rewritten with only the
    /// owner changed, guarded by the version observed at read time.
    pub fn transfer(&self, request: TransferAsset) -> Result<(), LedgerError> {
        let TransferAsset { id, new_owner } = request;

        let record = self.read(&id)?;
        let asset = self.decode(&id, &record.bytes)?;

        let credential = self.identity.caller()?;
        let caller = self.resolver.resolve(&credential)?;
        if !caller.is_owner(&asset.owner) {
            tracing::warn!(
                asset = %id,
                owner = %asset.owner,
                caller = %caller,
                "transfer rejected: caller is not the owner"
            );
            return Err(LedgerError::Unauthorized {
                id,
                owner: asset.owner,
                caller,
            });
        }

        let updated = asset.with_owner(new_owner);
        let bytes = codec::encode(&updated).map_err(|e| LedgerError::StoreWriteFailure {
            id: id.clone(),
            reason: format!("record encoding failed: {e}"),
        })?;

        match self
            .store
            .put(id.as_str(), bytes, Expected::Version(record.version))
        {
            Ok(()) => {
                tracing::info!(asset = %id, new_owner = %updated.owner, "asset transferred");
                Ok(())
            }
            // Our ownership check ran against a record that has since been
            // rewritten. Retrying is the caller's decision.
            Err(StoreError::Conflict { .. }) => Err(LedgerError::ConflictDetected { id }),
            Err(e) => Err(LedgerError::StoreWriteFailure {
                id,
                reason: e.to_string(),
            }),
        }
    }

    /// Read the current record for `id`; absent and unreadable both map to
    /// `NotFound`.
    fn read(&self, id: &AssetId) -> Result<VersionedRecord, LedgerError> {
        match self.store.get(id.as_str()) {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(LedgerError::NotFound { id: id.clone() }),
            Err(e) => {
                tracing::warn!(asset = %id, error = %e, "store read failed; reporting not found");
                Err(LedgerError::NotFound { id: id.clone() })
            }
        }
    }

    /// Decode a stored record, checking the key/payload drift invariant.
    fn decode(&self, id: &AssetId, bytes: &[u8]) -> Result<Asset, LedgerError> {
        let asset = codec::decode(bytes).map_err(|e| LedgerError::CorruptRecord {
            id: id.clone(),
            reason: e.to_string(),
        })?;
        if asset.id != *id {
            return Err(LedgerError::CorruptRecord {
                id: id.clone(),
                reason: format!("stored id {} does not match key", asset.id),
            });
        }
        Ok(asset)
    }
}
