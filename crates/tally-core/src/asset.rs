//! # Asset Entity
//!
//! The sole entity of the ledger: a discrete asset identified by `id`,
//! controlled by `owner`, carrying an integer `value` fixed at creation.
//!
//! ## Lifecycle
//!
//! ```text
//! Absent ──create──▶ Active(owner=O) ──transfer(caller=O)──▶ Active(owner=N)
//!                        │
//!                      query (read-only self-loop)
//! ```
//!
//! There is no transition back to Absent: deletion is not part of the core.
//! Mutation happens only through [`Asset::with_owner`], which rewrites the
//! owner and nothing else.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{AssetId, OwnerId};

/// A discrete asset recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier; equals the state-store key it is stored under.
    pub id: AssetId,
    /// The identity currently controlling the asset.
    pub owner: OwnerId,
    /// Integer value fixed at creation.
    pub value: i64,
}

impl Asset {
    /// Assemble an asset from validated parts.
    pub fn new(id: AssetId, owner: OwnerId, value: i64) -> Self {
        Self { id, owner, value }
    }

    /// The transferred copy of this asset: same `id`, same `value`, new
    /// `owner`. This is the only mutation the entity supports.
    pub fn with_owner(&self, new_owner: OwnerId) -> Self {
        Self {
            id: self.id.clone(),
            owner: new_owner,
            value: self.value,
        }
    }
}

/// Parse the string representation of an asset value.
///
/// Accepts a whole base-10 integer (optionally signed). Anything else is
/// rejected. The original implementation this replaces scanned with
/// `fmt.Sscanf` and silently defaulted to zero on malformed input; that
/// behavior was a correctness defect, not a contract.
///
/// # Errors
///
/// Returns `ValidationError::UnparsableValue` carrying the offending input.
pub fn parse_value(input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::UnparsableValue {
            input: input.to_string(),
        })
}
