//! # tally-dispatch — Operation Boundary
//!
//! The thin layer between a hosting runtime's `(name, args)` invocation
//! surface and the typed asset service. The host hands over an operation
//! name and an ordered list of string arguments; this crate validates shape
//! and content before anything touches the store.
//!
//! ## Wire surface
//!
//! Three named operations, fixed arity:
//!
//! | name            | args                  |
//! |-----------------|-----------------------|
//! | `createAsset`   | `id`, `owner`, `value`|
//! | `queryAsset`    | `id`                  |
//! | `transferAsset` | `id`, `newOwner`      |
//!
//! Arity mismatches and unknown names are rejected before any store access.
//! Successful queries return the encoded record bytes; successful
//! mutations return an empty response.

pub mod dispatcher;
pub mod operation;

pub use dispatcher::{Dispatcher, Response};
pub use operation::{DispatchError, Operation};
