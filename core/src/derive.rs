//! The four DUID derivations.
//!
//! Each function is pure: the same inputs always produce the same DUID, on
//! every host and every run. The `generate_*` variants take and return
//! text, decoding their inputs before any hashing happens.

use std::hash::Hasher;

use duidgen_common::identity::{ApplicationId, HashKey, MachineId};
use duidgen_common::network::mac::MacAddress;
use hmac::digest::Key;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use siphasher::sip::SipHasher24;
use tracing::debug;
use uuid::Builder;

use crate::duid::{ARP_HRD_ETHERNET, DUID_TIME_EPOCH, Duid, SYSTEMD_ENTERPRISE_NUMBER};
use crate::error::DuidError;

type HmacSha256 = Hmac<Sha256>;

/// DUID-LLT: Ethernet hardware type, the pinned 2000-01-01 time, then the MAC.
pub fn duid_llt(mac: &MacAddress) -> Duid {
    Duid::Llt {
        hardware_type: ARP_HRD_ETHERNET,
        time: DUID_TIME_EPOCH,
        mac: *mac,
    }
}

/// DUID-LL: Ethernet hardware type, then the MAC.
pub fn duid_ll(mac: &MacAddress) -> Duid {
    Duid::Ll {
        hardware_type: ARP_HRD_ETHERNET,
        mac: *mac,
    }
}

/// DUID-EN: SipHash-2-4 of the machine id, under systemd's enterprise number.
///
/// The 64-bit digest is emitted most significant byte first. That is the
/// byte-reversed form of the little-endian digest buffer, and it does not
/// depend on the endianness of the host.
pub fn duid_en(machine_id: &MachineId, hash_key: &HashKey) -> Duid {
    let mut hasher = SipHasher24::new_with_key(hash_key.as_bytes());
    hasher.write(machine_id.as_bytes());
    let digest: u64 = hasher.finish();
    debug!("DUID-EN digest {digest:#018x}");

    Duid::En {
        enterprise_number: SYSTEMD_ENTERPRISE_NUMBER,
        identifier: digest.to_be_bytes(),
    }
}

/// DUID-UUID: first 16 bytes of HMAC-SHA256(key = machine id, message =
/// application id), stamped as a version 4, RFC 4122 variant UUID.
pub fn duid_uuid(machine_id: &MachineId, application_id: &ApplicationId) -> Duid {
    // HMAC zero-pads keys shorter than the block, so the padded block is the same key.
    let mut key = Key::<HmacSha256>::default();
    key[..16].copy_from_slice(machine_id.as_bytes());

    let mut signer = HmacSha256::new(&key);
    signer.update(application_id.as_bytes());
    let digest = signer.finalize().into_bytes();

    let mut random_bytes = [0u8; 16];
    random_bytes.copy_from_slice(&digest[..16]);

    Duid::Uuid {
        uuid: Builder::from_random_bytes(random_bytes).into_uuid(),
    }
}

/// Text form of [`duid_llt`].
pub fn generate_duid_llt(mac: &str) -> Result<String, DuidError> {
    let mac: MacAddress = mac.parse()?;
    Ok(duid_llt(&mac).to_colon_hex())
}

/// Text form of [`duid_en`].
pub fn generate_duid_en(machine_id: &str, hash_key: &str) -> Result<String, DuidError> {
    let machine_id: MachineId = machine_id.parse()?;
    let hash_key: HashKey = hash_key.parse()?;
    Ok(duid_en(&machine_id, &hash_key).to_colon_hex())
}

/// Text form of [`duid_ll`].
pub fn generate_duid_ll(mac: &str) -> Result<String, DuidError> {
    let mac: MacAddress = mac.parse()?;
    Ok(duid_ll(&mac).to_colon_hex())
}

/// Text form of [`duid_uuid`].
pub fn generate_duid_uuid(machine_id: &str, application_id: &str) -> Result<String, DuidError> {
    let machine_id: MachineId = machine_id.parse()?;
    let application_id: ApplicationId = application_id.parse()?;
    Ok(duid_uuid(&machine_id, &application_id).to_colon_hex())
}
