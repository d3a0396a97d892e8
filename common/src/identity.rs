//! 128-bit identity values.
//!
//! [`MachineId`] is the per-host seed, [`ApplicationId`] a fixed
//! per-purpose constant and [`HashKey`] the SipHash key. All three are 16
//! raw bytes; they only differ in where they come from and how strictly
//! their text form is parsed.

use std::fmt;
use std::str::FromStr;

use crate::error::IdentityError;
use crate::utils::colon_hex;

/// Decodes `s` (surrounding whitespace ignored) into exactly 16 bytes.
fn parse_id128(field: &'static str, s: &str) -> Result<[u8; 16], IdentityError> {
    let bytes = colon_hex::decode_hex(field, s.trim())?;
    bytes.as_slice().try_into().map_err(|_| IdentityError::Length {
        field,
        expected: 16,
        actual: bytes.len(),
    })
}

macro_rules! id128 {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; 16]);

        impl $name {
            pub const fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; 16] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdentityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id128($field, s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }
    };
}

id128!(
    /// The host's stable identity, usually the 32 hex digits of `/etc/machine-id`.
    MachineId,
    "machine id"
);

id128!(
    /// Application-specific constant mixed with the machine id so the raw
    /// machine id never shows up in a derived value.
    ApplicationId,
    "application id"
);

/// A 128-bit SipHash key.
///
/// Text keys longer than 16 bytes are accepted and cut down to the first
/// 16, which is all the hash consumes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey([u8; 16]);

impl HashKey {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl FromStr for HashKey {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = colon_hex::decode_hex("hash key", s.trim())?;
        let Some(key) = bytes.get(..16) else {
            return Err(IdentityError::Length {
                field: "hash key",
                expected: 16,
                actual: bytes.len(),
            });
        };
        if bytes.len() > 16 {
            tracing::debug!("hash key has {} bytes, using the first 16", bytes.len());
        }

        let mut out = [0u8; 16];
        out.copy_from_slice(key);
        Ok(Self(out))
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashKey({})", hex::encode(self.0))
    }
}
