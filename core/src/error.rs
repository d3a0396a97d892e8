use duidgen_common::IdentityError;
use thiserror::Error;

use crate::duid::DuidType;

#[derive(Debug, Error)]
pub enum DuidError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("unknown DUID type {0:#06x}")]
    UnknownType(u16),

    #[error("unknown DUID type name '{0}'")]
    UnknownTypeName(String),

    #[error("DUID of {0} bytes is too short to carry a type")]
    Truncated(usize),

    #[error("{duid_type} must be {expected} bytes, got {actual}")]
    Length {
        duid_type: DuidType,
        expected: usize,
        actual: usize,
    },

    #[error("{0} needs a machine id")]
    MissingMachineId(DuidType),
}

impl DuidError {
    /// True when the input was not valid hex.
    pub fn is_decode(&self) -> bool {
        matches!(self, DuidError::Identity(err) if err.is_decode())
    }
}
