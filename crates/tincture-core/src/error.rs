//! Error types for the entity source boundary.

use std::error::Error;
use std::fmt;

use crate::id::SupplierId;

/// Errors from fetching or validating supplier records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// The backing store could not be read.
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// A supplier record carried an attribute outside its domain.
    InvalidSupplier {
        /// The offending supplier.
        id: SupplierId,
        /// Which attribute was rejected and why.
        reason: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "supplier source unavailable: {reason}"),
            Self::InvalidSupplier { id, reason } => {
                write!(f, "supplier {id} is invalid: {reason}")
            }
        }
    }
}

impl Error for SourceError {}
