//! # Identity Provider and Principal Resolution
//!
//! The service never authenticates anyone. The hosting runtime hands it an
//! already-authenticated [`Credential`] through the [`IdentityProvider`]
//! contract; a [`PrincipalResolver`] then derives the principal string that
//! is compared against the recorded owner.
//!
//! ## Why resolution is pluggable
//!
//! What the host authenticates (a certificate subject, a token subject, an
//! MSP-style membership id) varies per deployment, and the predecessor of
//! this code compared ownership against a hardcoded literal, which made the
//! check meaningless for every caller but one. The resolver is therefore a
//! configuration point fixed once at service construction:
//!
//! - [`SubjectResolver`] for hosts whose credential already is the
//!   principal (token-subject style).
//! - [`CommonNameResolver`] for hosts that supply an X.500-style subject
//!   string, resolving the `CN=` attribute.
//!
//! Implementations must be `Send + Sync` so they can be shared across
//! invocations behind an `Arc`. Both traits are object-safe to support
//! runtime selection.

use thiserror::Error;

use tally_core::{PrincipalId, ValidationError};

/// Already-authenticated identity material for the current caller.
///
/// The raw form is host-specific: a certificate subject, a token subject,
/// or any other string the host vouches for. The core only ever passes it
/// to a [`PrincipalResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap raw credential material.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw credential string as supplied by the host.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Failure to obtain or resolve the caller identity.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The host could not supply a caller credential.
    #[error("caller identity unavailable: {reason}")]
    Unavailable {
        /// Host-specific failure description.
        reason: String,
    },

    /// The credential does not contain what the resolver needs.
    #[error("credential does not resolve to a principal: {reason}")]
    Unresolvable {
        /// What was missing or malformed.
        reason: String,
    },

    /// The resolved principal failed validation.
    #[error("resolved principal is invalid: {0}")]
    InvalidPrincipal(#[from] ValidationError),
}

/// Supplies the verified identity of the entity invoking an operation.
pub trait IdentityProvider: Send + Sync {
    /// The credential of the current caller, authenticated by the host.
    fn caller(&self) -> Result<Credential, IdentityError>;
}

/// Derives the principal compared against the recorded owner.
pub trait PrincipalResolver: Send + Sync {
    /// Resolve a credential to a principal identifier.
    fn resolve(&self, credential: &Credential) -> Result<PrincipalId, IdentityError>;
}

/// Resolver for hosts whose credential string already is the principal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectResolver;

impl PrincipalResolver for SubjectResolver {
    fn resolve(&self, credential: &Credential) -> Result<PrincipalId, IdentityError> {
        Ok(PrincipalId::new(credential.as_str())?)
    }
}

/// Resolver for X.500-style subject strings, e.g.
/// `CN=alice,OU=clients,O=example`.
///
/// Resolution takes the value of the first `CN=` attribute, matched
/// case-insensitively on the attribute name. A credential without one is
/// unresolvable, not an empty principal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonNameResolver;

impl PrincipalResolver for CommonNameResolver {
    fn resolve(&self, credential: &Credential) -> Result<PrincipalId, IdentityError> {
        let cn = credential
            .as_str()
            .split(',')
            .map(str::trim)
            .find_map(|attr| {
                let (name, value) = attr.split_once('=')?;
                name.trim().eq_ignore_ascii_case("cn").then(|| value.trim())
            })
            .ok_or_else(|| IdentityError::Unresolvable {
                reason: "no CN attribute in subject".to_string(),
            })?;
        Ok(PrincipalId::new(cn)?)
    }
}

/// Identity provider returning a fixed credential. Test and demo fixture.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    credential: Credential,
}

impl StaticIdentity {
    /// Provider whose caller is always the given credential.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(raw),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn caller(&self) -> Result<Credential, IdentityError> {
        Ok(self.credential.clone())
    }
}
