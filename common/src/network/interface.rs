use pnet::datalink::{self, NetworkInterface};
use tracing::debug;

use crate::error::IdentityError;
use crate::network::mac::MacAddress;
use crate::utils::interface::NetworkInterfaceExtension;

/// Looks up the MAC address of the interface called `name` on this host.
pub fn get_interface_mac(name: &str) -> Result<MacAddress, IdentityError> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    debug!("Identified {} network interface(s)", interfaces.len());
    select_interface_mac(name, &interfaces)
}

/// Picks the MAC address of `name` out of an interface list.
///
/// Loopback and tunnel devices report no address or an all-zero one; both
/// are refused since a DUID built from them would not identify the host.
pub fn select_interface_mac(
    name: &str,
    interfaces: &[NetworkInterface],
) -> Result<MacAddress, IdentityError> {
    let interface: &NetworkInterface = interfaces
        .iter()
        .find(|interface| interface.name == name)
        .ok_or_else(|| IdentityError::UnknownInterface {
            name: name.to_string(),
            candidates: candidate_interfaces(interfaces),
        })?;

    interface
        .duid_mac()
        .ok_or_else(|| IdentityError::NoMacAddress(name.to_string()))
}

/// Names of interfaces that could feed a link-layer DUID.
pub fn candidate_interfaces(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces
        .iter()
        .filter(|interface| !interface.is_loopback() && interface.duid_mac().is_some())
        .map(|interface| interface.name.clone())
        .collect()
}
