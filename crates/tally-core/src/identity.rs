//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifier namespaces of the ledger. These
//! prevent accidental identifier confusion: you cannot pass an `OwnerId`
//! where an `AssetId` is expected, and none of them can be empty.
//!
//! `PrincipalId` is deliberately distinct from `OwnerId` even though both
//! wrap a string. An owner is what the ledger recorded; a principal is what
//! the identity provider resolved for the current caller. The authorization
//! check in the service layer is the only place the two meet.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for an asset; doubles as the state-store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

/// Identity recorded as the current controlling owner of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

/// Resolved identity of the entity invoking an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl AssetId {
    /// Construct a validated asset identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyAssetId` for the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyAssetId);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice (the state-store key).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl OwnerId {
    /// Construct a validated owner identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyOwner` for the empty string.
    pub fn new(owner: impl Into<String>) -> Result<Self, ValidationError> {
        let owner = owner.into();
        if owner.is_empty() {
            return Err(ValidationError::EmptyOwner);
        }
        Ok(Self(owner))
    }

    /// The owner identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PrincipalId {
    /// Construct a validated principal identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPrincipal` for the empty string.
    pub fn new(principal: impl Into<String>) -> Result<Self, ValidationError> {
        let principal = principal.into();
        if principal.is_empty() {
            return Err(ValidationError::EmptyPrincipal);
        }
        Ok(Self(principal))
    }

    /// The principal identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this principal is the given owner.
    ///
    /// This is the single ownership-equality rule used by the authorization
    /// check: exact match on the resolved principal string.
    pub fn is_owner(&self, owner: &OwnerId) -> bool {
        self.0 == owner.as_str()
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_rejects_empty() {
        assert_eq!(AssetId::new("").unwrap_err(), ValidationError::EmptyAssetId);
    }

    #[test]
    fn test_owner_id_rejects_empty() {
        assert_eq!(OwnerId::new("").unwrap_err(), ValidationError::EmptyOwner);
    }

    #[test]
    fn test_principal_id_rejects_empty() {
        assert_eq!(
            PrincipalId::new("").unwrap_err(),
            ValidationError::EmptyPrincipal
        );
    }

    #[test]
    fn test_asset_id_roundtrip() {
        let id = AssetId::new("ast1").unwrap();
        assert_eq!(id.as_str(), "ast1");
        assert_eq!(id.to_string(), "ast1");
    }

    #[test]
    fn test_principal_matches_owner() {
        let owner = OwnerId::new("alice").unwrap();
        let alice = PrincipalId::new("alice").unwrap();
        let bob = PrincipalId::new("bob").unwrap();
        assert!(alice.is_owner(&owner));
        assert!(!bob.is_owner(&owner));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = AssetId::new("ast1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""ast1""#);
        let back: AssetId = serde_json::from_str(r#""ast1""#).unwrap();
        assert_eq!(back, id);
    }
}
