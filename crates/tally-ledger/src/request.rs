//! # Typed Operation Requests
//!
//! One request value per operation, built from validated parts. The string
//! arguments of the wire surface are parsed and validated at the dispatch
//! boundary; by the time a request reaches the service, its fields already
//! satisfy the entity invariants. Constructing one by hand in tests or
//! embedding code goes through the same validating constructors.

use tally_core::{AssetId, OwnerId};

/// Request to create an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAsset {
    /// Identifier for the new asset; must not already be in use.
    pub id: AssetId,
    /// Initial owner.
    pub owner: OwnerId,
    /// Value fixed at creation.
    pub value: i64,
}

/// Request to read an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAsset {
    /// The asset to read.
    pub id: AssetId,
}

/// Request to transfer an asset to a new owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferAsset {
    /// The asset to transfer.
    pub id: AssetId,
    /// The owner the record is rewritten to.
    pub new_owner: OwnerId,
}
