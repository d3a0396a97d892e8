use crate::identity::{ApplicationId, HashKey};
use crate::network::mac::MacAddress;

/// Placeholder used when no MAC address is given.
pub const DEFAULT_MAC: MacAddress = MacAddress::BROADCAST;

/// SipHash key systemd-networkd uses for DUID-EN.
///
/// Usually quoted as `80118cc2fe4a03ee3ed60c6f363914090a`; only the first
/// 16 bytes reach the hash.
pub const DUID_EN_HASH_KEY: HashKey = HashKey::from_bytes([
    0x80, 0x11, 0x8c, 0xc2, 0xfe, 0x4a, 0x03, 0xee, 0x3e, 0xd6, 0x0c, 0x6f, 0x36, 0x39, 0x14, 0x09,
]);

/// Application id systemd-networkd uses for DUID-UUID.
pub const DUID_UUID_APPLICATION_ID: ApplicationId = ApplicationId::from_bytes([
    0xa5, 0x0a, 0xd1, 0x12, 0xbf, 0x60, 0x45, 0x77, 0xa2, 0xfb, 0x74, 0x1a, 0xb1, 0x95, 0x5b, 0x03,
]);

/// Inputs every derivation draws from, apart from the machine id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuidConfig {
    /// Link-layer address used by DUID-LLT and DUID-LL.
    pub mac: MacAddress,
    /// SipHash key for DUID-EN.
    pub hash_key: HashKey,
    /// HMAC message for DUID-UUID.
    pub application_id: ApplicationId,
}

impl DuidConfig {
    /// True when the MAC is still the broadcast placeholder.
    pub fn is_placeholder_mac(&self) -> bool {
        self.mac == DEFAULT_MAC
    }
}

impl Default for DuidConfig {
    fn default() -> Self {
        Self {
            mac: DEFAULT_MAC,
            hash_key: DUID_EN_HASH_KEY,
            application_id: DUID_UUID_APPLICATION_ID,
        }
    }
}
