use pnet::datalink::NetworkInterface;

use crate::network::mac::MacAddress;

pub trait NetworkInterfaceExtension {
    /// The interface's hardware address, if it has a non-zero one.
    fn duid_mac(&self) -> Option<MacAddress>;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn duid_mac(&self) -> Option<MacAddress> {
        self.mac
            .map(MacAddress::from)
            .filter(|mac| !mac.is_zero())
    }
}
