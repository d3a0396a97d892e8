//! DHCP Unique Identifier derivation.
//!
//! Reproduces the four DUID flavours systemd-networkd derives from a host's
//! MAC address and machine id, byte for byte:
//!
//! * **DUID-LLT**: link-layer address plus a time pinned to 2000-01-01.
//! * **DUID-EN**: SipHash-2-4 of the machine id under a fixed enterprise number.
//! * **DUID-LL**: link-layer address only.
//! * **DUID-UUID**: HMAC-SHA256 of an application id keyed by the machine id.

pub mod derive;
pub mod duid;
pub mod error;
pub mod generator;

pub use derive::{duid_en, duid_ll, duid_llt, duid_uuid};
pub use duid::{Duid, DuidType};
pub use error::DuidError;
pub use generator::DuidGenerator;
