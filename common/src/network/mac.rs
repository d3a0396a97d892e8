use std::fmt;
use std::str::FromStr;

use pnet::util::MacAddr;

use crate::error::IdentityError;
use crate::utils::colon_hex;

/// A 48-bit link-layer address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xff; 6]);

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = IdentityError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let octets: [u8; 6] = bytes.try_into().map_err(|_| IdentityError::Length {
            field: "MAC address",
            expected: 6,
            actual: bytes.len(),
        })?;
        Ok(Self(octets))
    }
}

impl From<MacAddr> for MacAddress {
    fn from(mac: MacAddr) -> Self {
        let MacAddr(a, b, c, d, e, f) = mac;
        Self([a, b, c, d, e, f])
    }
}

impl FromStr for MacAddress {
    type Err = IdentityError;

    /// Parses a MAC address.
    ///
    /// Supported formats:
    /// * **Colon**: `aa:bb:cc:dd:ee:ff`
    /// * **Dash**: `aa-bb-cc-dd-ee-ff`
    /// * **Bare**: `aabbccddeeff`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bare: String = if s.contains(':') || s.contains('-') {
            let groups: Vec<&str> = s.split([':', '-']).collect();
            if groups.len() != 6 || groups.iter().any(|g| g.len() != 2) {
                return Err(IdentityError::InvalidMac(s.to_string()));
            }
            groups.concat()
        } else {
            s.to_string()
        };

        if bare.len() != 12 {
            return Err(IdentityError::InvalidMac(s.to_string()));
        }

        let bytes = colon_hex::decode_hex("MAC address", &bare)
            .map_err(|_| IdentityError::InvalidMac(s.to_string()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&colon_hex::to_colon_hex(&self.0))
    }
}
