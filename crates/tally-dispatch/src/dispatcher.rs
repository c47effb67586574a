//! # Dispatcher
//!
//! Routes a parsed operation into the asset service and shapes the result
//! for the host: empty for mutations, the canonical record bytes for
//! queries. The dispatcher owns no logic beyond routing; everything with an
//! invariant lives in `tally-ledger`.

use tally_core::codec;
use tally_ledger::{AssetService, LedgerError};

use crate::operation::{DispatchError, Operation};

/// Successful operation result as returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Mutating operations return no payload.
    Empty,
    /// Queries return the encoded asset record.
    Payload(Vec<u8>),
}

impl Response {
    /// The payload bytes, if any.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Empty => None,
            Self::Payload(bytes) => Some(bytes),
        }
    }
}

/// Routes named operations to an [`AssetService`].
#[derive(Clone)]
pub struct Dispatcher {
    service: AssetService,
}

impl Dispatcher {
    /// Wrap a service.
    pub fn new(service: AssetService) -> Self {
        Self { service }
    }

    /// Parse and execute one named operation.
    ///
    /// Validation failures are rejected before any store access; service
    /// failures are surfaced verbatim as [`DispatchError::Ledger`], each
    /// with a human-readable `Display` for the host to log or return.
    pub fn dispatch(&self, name: &str, args: &[String]) -> Result<Response, DispatchError> {
        match Operation::parse(name, args)? {
            Operation::Create(req) => {
                self.service.create(req)?;
                Ok(Response::Empty)
            }
            Operation::Query(req) => {
                let id = req.id.clone();
                let asset = self.service.query(req)?;
                // Re-encoding the decoded record is byte-identical under
                // the deterministic codec, so the host sees the stored
                // bytes.
                let bytes = codec::encode(&asset).map_err(|e| {
                    LedgerError::CorruptRecord {
                        id,
                        reason: e.to_string(),
                    }
                })?;
                Ok(Response::Payload(bytes))
            }
            Operation::Transfer(req) => {
                self.service.transfer(req)?;
                Ok(Response::Empty)
            }
        }
    }
}
