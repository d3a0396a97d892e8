use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning raw input into identity values.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Hex input had an odd number of digits.
    #[error("{field}: hex input has odd length {len}")]
    OddLength { field: &'static str, len: usize },

    /// Hex input contained something other than hex digits.
    #[error("{field}: invalid hex character {character:?} at index {index}")]
    InvalidHex {
        field: &'static str,
        character: char,
        index: usize,
    },

    /// A fixed-size field decoded to the wrong number of bytes.
    #[error("{field}: expected {expected} bytes, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid MAC address '{0}'")]
    InvalidMac(String),

    #[error("no network interface named '{name}' (usable: {})", .candidates.join(", "))]
    UnknownInterface {
        name: String,
        candidates: Vec<String>,
    },

    #[error("interface '{0}' has no usable MAC address")]
    NoMacAddress(String),

    #[error("failed to read machine id from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IdentityError {
    /// Maps a `hex` crate failure onto the field it happened in.
    pub fn from_hex(field: &'static str, len: usize, err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => IdentityError::InvalidHex {
                field,
                character: c,
                index,
            },
            // `InvalidStringLength` only comes out of slice decoding.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                IdentityError::OddLength { field, len }
            }
        }
    }

    /// True for the malformed-hex class of errors.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            IdentityError::OddLength { .. } | IdentityError::InvalidHex { .. }
        )
    }
}
