//! # Operation Parsing
//!
//! Turns the host's string-typed invocation into a typed request value.
//! The predecessor of this code switched on the function name and indexed
//! into the argument slice by hand inside each handler; here the whole
//! boundary check happens in one place, and the service only ever sees
//! requests whose fields already satisfy the entity invariants.

use thiserror::Error;

use tally_core::{parse_value, AssetId, OwnerId, ValidationError};
use tally_ledger::{CreateAsset, LedgerError, QueryAsset, TransferAsset};

/// Wire name of the create operation.
pub const CREATE_ASSET: &str = "createAsset";
/// Wire name of the query operation.
pub const QUERY_ASSET: &str = "queryAsset";
/// Wire name of the transfer operation.
pub const TRANSFER_ASSET: &str = "transferAsset";

/// A fully validated operation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `createAsset(id, owner, value)`
    Create(CreateAsset),
    /// `queryAsset(id)`
    Query(QueryAsset),
    /// `transferAsset(id, newOwner)`
    Transfer(TransferAsset),
}

/// Failure at the dispatch boundary or inside the service.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The operation name is not part of the surface.
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// The name the host supplied.
        name: String,
    },

    /// Wrong number of arguments for the named operation.
    #[error("{operation} expects {expected} argument(s), got {got}")]
    Arity {
        /// The operation name.
        operation: &'static str,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },

    /// An argument failed validation (empty id/owner, unparsable value).
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The service rejected the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl Operation {
    /// Parse a named operation and its ordered string arguments.
    ///
    /// All shape and content validation happens here, before any store
    /// access: unknown names, arity mismatches, empty identifiers, and
    /// malformed values are rejected with a structured error.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, DispatchError> {
        match name {
            CREATE_ASSET => {
                let [id, owner, value] = expect_arity::<3>(CREATE_ASSET, args)?;
                Ok(Self::Create(CreateAsset {
                    id: AssetId::new(id)?,
                    owner: OwnerId::new(owner)?,
                    value: parse_value(value)?,
                }))
            }
            QUERY_ASSET => {
                let [id] = expect_arity::<1>(QUERY_ASSET, args)?;
                Ok(Self::Query(QueryAsset {
                    id: AssetId::new(id)?,
                }))
            }
            TRANSFER_ASSET => {
                let [id, new_owner] = expect_arity::<2>(TRANSFER_ASSET, args)?;
                Ok(Self::Transfer(TransferAsset {
                    id: AssetId::new(id)?,
                    new_owner: OwnerId::new(new_owner)?,
                }))
            }
            other => Err(DispatchError::UnknownOperation {
                name: other.to_string(),
            }),
        }
    }
}

/// Check the argument count and return the arguments as a fixed-size view.
fn expect_arity<'a, const N: usize>(
    operation: &'static str,
    args: &'a [String],
) -> Result<[&'a str; N], DispatchError> {
    if args.len() != N {
        return Err(DispatchError::Arity {
            operation,
            expected: N,
            got: args.len(),
        });
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}
