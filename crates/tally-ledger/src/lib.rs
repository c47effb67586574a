//! # tally-ledger — Asset Service and Collaborator Contracts
//!
//! The core of the Tally stack: the service that owns the rules for how an
//! asset record is created, read, validated, and mutated, and how caller
//! identity is verified before a mutating operation is allowed.
//!
//! ## Collaborators
//!
//! The service never implements persistence or authentication itself. It is
//! constructed once with three injected trait objects:
//!
//! - [`StateStore`] — the key-value ledger backing. Writes carry an
//!   expectation (`Absent` or a specific version) so conflicting writers are
//!   detected by the store, not papered over by the service.
//! - [`IdentityProvider`] — supplies the already-authenticated credential of
//!   the entity invoking an operation.
//! - [`PrincipalResolver`] — the pluggable rule that turns a raw credential
//!   into the principal string compared against the recorded owner.
//!
//! ## Concurrency Model
//!
//! Every operation is synchronous and runs to completion; the service holds
//! no long-lived copy of any record and performs no in-process locking. Each
//! read-then-write sequence is protected by the store's versioned-write
//! contract: the loser of a concurrent transfer gets
//! [`LedgerError::ConflictDetected`] and retry policy belongs to the caller.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every operation returns exactly one of success or one structured
//!   [`LedgerError`].

pub mod error;
pub mod identity;
pub mod memory;
pub mod request;
pub mod service;
pub mod store;

pub use error::LedgerError;
pub use identity::{
    CommonNameResolver, Credential, IdentityError, IdentityProvider, PrincipalResolver,
    StaticIdentity, SubjectResolver,
};
pub use memory::MemoryStore;
pub use request::{CreateAsset, QueryAsset, TransferAsset};
pub use service::AssetService;
pub use store::{Expected, StateStore, StoreError, VersionedRecord};
