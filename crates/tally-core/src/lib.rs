//! # tally-core — Foundational Types for the Tally Asset Ledger
//!
//! This crate is the bedrock of the Tally stack. It defines the entity model
//! and the byte-level codec that every other crate builds on. It depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AssetId`, `OwnerId`,
//!    `PrincipalId` are validated newtypes. No bare strings for identifiers,
//!    and no way to construct an empty one.
//!
//! 2. **Fail-fast value parsing.** `parse_value()` rejects anything that is
//!    not a whole base-10 integer. There is no silent default to zero.
//!
//! 3. **Deterministic encoding.** `codec::encode()` produces compact JSON
//!    with a fixed field order, so the same asset always encodes to the
//!    same bytes and `decode(encode(a)) == a` holds exactly.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tally-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod asset;
pub mod codec;
pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use asset::{parse_value, Asset};
pub use error::{CodecError, ValidationError};
pub use identity::{AssetId, OwnerId, PrincipalId};
