//! The DUID tagged union and its wire layout.
//!
//! All multi-byte fields are big-endian, as they appear on the wire in
//! DHCPv6. The text form is lowercase colon-separated hex.

use std::fmt;
use std::str::FromStr;

use duidgen_common::network::mac::MacAddress;
use duidgen_common::utils::colon_hex;
use uuid::Uuid;

use crate::error::DuidError;

/// ARP hardware type for Ethernet.
pub const ARP_HRD_ETHERNET: u16 = 0x0001;

/// systemd's IANA private enterprise number.
pub const SYSTEMD_ENTERPRISE_NUMBER: u32 = 0x0000_ab11;

/// DUID-LLT time field: seconds since 2000-01-01T00:00:00Z, pinned to zero.
pub const DUID_TIME_EPOCH: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum DuidType {
    /// Link-layer address plus time.
    Llt = 1,
    /// Vendor-assigned, based on enterprise number.
    En = 2,
    /// Link-layer address.
    Ll = 3,
    /// UUID based.
    Uuid = 4,
}

impl DuidType {
    pub const ALL: [DuidType; 4] = [DuidType::Llt, DuidType::En, DuidType::Ll, DuidType::Uuid];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(DuidType::Llt),
            2 => Some(DuidType::En),
            3 => Some(DuidType::Ll),
            4 => Some(DuidType::Uuid),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DuidType::Llt => "DUID_LLT",
            DuidType::En => "DUID_EN",
            DuidType::Ll => "DUID_LL",
            DuidType::Uuid => "DUID_UUID",
        }
    }

    /// Encoded length, type tag included.
    pub fn encoded_len(self) -> usize {
        match self {
            DuidType::Llt => 14,
            DuidType::En => 14,
            DuidType::Ll => 10,
            DuidType::Uuid => 18,
        }
    }

    /// Whether deriving this type needs the machine id.
    pub fn needs_machine_id(self) -> bool {
        matches!(self, DuidType::En | DuidType::Uuid)
    }
}

impl fmt::Display for DuidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DuidType {
    type Err = DuidError;

    /// Accepts `llt`, `en`, `ll`, `uuid`, with or without a `duid_` prefix, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("duid_").unwrap_or(&lower);
        match name {
            "llt" => Ok(DuidType::Llt),
            "en" => Ok(DuidType::En),
            "ll" => Ok(DuidType::Ll),
            "uuid" => Ok(DuidType::Uuid),
            _ => Err(DuidError::UnknownTypeName(s.to_string())),
        }
    }
}

/// A DHCP Unique Identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duid {
    Llt {
        hardware_type: u16,
        time: u32,
        mac: MacAddress,
    },
    En {
        enterprise_number: u32,
        identifier: [u8; 8],
    },
    Ll {
        hardware_type: u16,
        mac: MacAddress,
    },
    Uuid {
        uuid: Uuid,
    },
}

impl Duid {
    pub fn duid_type(&self) -> DuidType {
        match self {
            Duid::Llt { .. } => DuidType::Llt,
            Duid::En { .. } => DuidType::En,
            Duid::Ll { .. } => DuidType::Ll,
            Duid::Uuid { .. } => DuidType::Uuid,
        }
    }

    /// Wire encoding: 2-byte type tag followed by the variant's fields.
    pub fn to_bytes(&self) -> Vec<u8> {
        let duid_type = self.duid_type();
        let mut out = Vec::with_capacity(duid_type.encoded_len());
        out.extend_from_slice(&duid_type.code().to_be_bytes());

        match self {
            Duid::Llt {
                hardware_type,
                time,
                mac,
            } => {
                out.extend_from_slice(&hardware_type.to_be_bytes());
                out.extend_from_slice(&time.to_be_bytes());
                out.extend_from_slice(&mac.octets());
            }
            Duid::En {
                enterprise_number,
                identifier,
            } => {
                out.extend_from_slice(&enterprise_number.to_be_bytes());
                out.extend_from_slice(identifier);
            }
            Duid::Ll { hardware_type, mac } => {
                out.extend_from_slice(&hardware_type.to_be_bytes());
                out.extend_from_slice(&mac.octets());
            }
            Duid::Uuid { uuid } => out.extend_from_slice(uuid.as_bytes()),
        }

        out
    }

    /// Parses the wire encoding back into a [`Duid`].
    ///
    /// Only the fixed layouts produced by the derivations are understood:
    /// Ethernet-sized link-layer addresses and 8-byte enterprise identifiers.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DuidError> {
        let Some((tag, body)) = bytes.split_first_chunk::<2>() else {
            return Err(DuidError::Truncated(bytes.len()));
        };
        let code = u16::from_be_bytes(*tag);
        let duid_type = DuidType::from_code(code).ok_or(DuidError::UnknownType(code))?;

        if bytes.len() != duid_type.encoded_len() {
            return Err(DuidError::Length {
                duid_type,
                expected: duid_type.encoded_len(),
                actual: bytes.len(),
            });
        }

        let duid = match duid_type {
            DuidType::Llt => Duid::Llt {
                hardware_type: u16::from_be_bytes([body[0], body[1]]),
                time: u32::from_be_bytes([body[2], body[3], body[4], body[5]]),
                mac: MacAddress::try_from(&body[6..12])?,
            },
            DuidType::En => {
                let mut identifier = [0u8; 8];
                identifier.copy_from_slice(&body[4..12]);
                Duid::En {
                    enterprise_number: u32::from_be_bytes([body[0], body[1], body[2], body[3]]),
                    identifier,
                }
            }
            DuidType::Ll => Duid::Ll {
                hardware_type: u16::from_be_bytes([body[0], body[1]]),
                mac: MacAddress::try_from(&body[2..8])?,
            },
            DuidType::Uuid => Duid::Uuid {
                uuid: Uuid::from_slice(body).map_err(|_| DuidError::Length {
                    duid_type,
                    expected: duid_type.encoded_len(),
                    actual: bytes.len(),
                })?,
            },
        };

        Ok(duid)
    }

    /// Colon-separated lowercase hex, e.g. `00:03:00:01:ff:ff:ff:ff:ff:ff`.
    pub fn to_colon_hex(&self) -> String {
        colon_hex::to_colon_hex(&self.to_bytes())
    }
}

impl fmt::Display for Duid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_colon_hex())
    }
}

impl FromStr for Duid {
    type Err = DuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = colon_hex::decode_colon_hex("DUID", s)?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_type_codes() {
        for duid_type in DuidType::ALL {
            assert_eq!(DuidType::from_code(duid_type.code()), Some(duid_type));
        }
        assert_eq!(DuidType::from_code(0), None);
        assert_eq!(DuidType::from_code(5), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!("llt".parse::<DuidType>().unwrap(), DuidType::Llt);
        assert_eq!("DUID_EN".parse::<DuidType>().unwrap(), DuidType::En);
        assert_eq!("Uuid".parse::<DuidType>().unwrap(), DuidType::Uuid);
        assert!("ll2".parse::<DuidType>().is_err());
        assert_eq!(DuidType::Ll.to_string(), "DUID_LL");
    }

    #[test]
    fn test_parse_llt() {
        let duid: Duid = "00:01:00:01:00:00:00:00:ff:ff:ff:ff:ff:ff".parse().unwrap();
        assert_eq!(
            duid,
            Duid::Llt {
                hardware_type: ARP_HRD_ETHERNET,
                time: DUID_TIME_EPOCH,
                mac: MacAddress::BROADCAST,
            }
        );
    }

    #[test]
    fn test_parse_en() {
        let bytes = hex!("00020000ab11fbf66558347272cd");
        let duid = Duid::from_bytes(&bytes).unwrap();
        assert_eq!(
            duid,
            Duid::En {
                enterprise_number: SYSTEMD_ENTERPRISE_NUMBER,
                identifier: hex!("fbf66558347272cd"),
            }
        );
        assert_eq!(duid.to_bytes(), bytes.to_vec());
    }

    #[test]
    fn test_parse_uuid_bare_hex() {
        let duid: Duid = "0004b130bab1f4cf4d16be4991b7967619b0".parse().unwrap();
        assert_eq!(duid.duid_type(), DuidType::Uuid);
        assert_eq!(duid.to_string(), "00:04:b1:30:ba:b1:f4:cf:4d:16:be:49:91:b7:96:76:19:b0");

        let Duid::Uuid { uuid } = duid else {
            panic!("expected a UUID DUID");
        };
        assert_eq!(uuid.hyphenated().to_string(), "b130bab1-f4cf-4d16-be49-91b7967619b0");
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Duid::from_bytes(&[0x00]),
            Err(DuidError::Truncated(1))
        ));
        assert!(matches!(
            "00:09:00:01".parse::<Duid>(),
            Err(DuidError::UnknownType(9))
        ));
        assert!(matches!(
            "00:03:00:01:ff:ff".parse::<Duid>(),
            Err(DuidError::Length { duid_type: DuidType::Ll, expected: 10, actual: 6 })
        ));
        assert!("00:03:0".parse::<Duid>().unwrap_err().is_decode());
    }

    #[test]
    fn test_encoded_len_matches_to_bytes() {
        let mac = MacAddress::new([1, 2, 3, 4, 5, 6]);
        let samples = [
            Duid::Llt { hardware_type: 1, time: 0, mac },
            Duid::En { enterprise_number: 1, identifier: [0; 8] },
            Duid::Ll { hardware_type: 1, mac },
            Duid::Uuid { uuid: Uuid::nil() },
        ];
        for duid in samples {
            assert_eq!(duid.to_bytes().len(), duid.duid_type().encoded_len());
        }
    }
}
