use colored::*;
use duidgen_common::utils::colon_hex;
use duidgen_core::Duid;
use duidgen_core::duid::{ARP_HRD_ETHERNET, SYSTEMD_ENTERPRISE_NUMBER};

use crate::terminal::colors;

type Detail = (String, ColoredString);

fn hardware_type_detail(hardware_type: u16) -> Detail {
    let name = if hardware_type == ARP_HRD_ETHERNET {
        format!("{hardware_type} (Ethernet)")
    } else {
        hardware_type.to_string()
    };
    ("HwType".to_string(), name.color(colors::TEXT_DEFAULT))
}

/// Breaks a DUID into labelled fields for tree printing.
pub fn duid_to_details(duid: &Duid) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        "Type".to_string(),
        duid.duid_type().code().to_string().color(colors::ACCENT),
    )];

    match duid {
        Duid::Llt {
            hardware_type,
            time,
            mac,
        } => {
            details.push(hardware_type_detail(*hardware_type));
            details.push((
                "Time".to_string(),
                format!("{time} s after 2000-01-01").color(colors::TEXT_DEFAULT),
            ));
            details.push(("MAC".to_string(), mac.to_string().color(colors::MAC_ADDR)));
        }
        Duid::En {
            enterprise_number,
            identifier,
        } => {
            let enterprise = if *enterprise_number == SYSTEMD_ENTERPRISE_NUMBER {
                format!("{enterprise_number} (systemd)")
            } else {
                enterprise_number.to_string()
            };
            details.push(("PEN".to_string(), enterprise.color(colors::TEXT_DEFAULT)));
            details.push((
                "Ident".to_string(),
                colon_hex::to_colon_hex(identifier).color(colors::DUID_VALUE),
            ));
        }
        Duid::Ll { hardware_type, mac } => {
            details.push(hardware_type_detail(*hardware_type));
            details.push(("MAC".to_string(), mac.to_string().color(colors::MAC_ADDR)));
        }
        Duid::Uuid { uuid } => {
            details.push((
                "UUID".to_string(),
                uuid.hyphenated().to_string().color(colors::DUID_VALUE),
            ));
        }
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use duidgen_common::network::mac::MacAddress;

    #[test]
    fn uuid_is_hyphenated() {
        let duid: Duid = "00:04:b1:30:ba:b1:f4:cf:4d:16:be:49:91:b7:96:76:19:b0".parse().unwrap();
        let details = duid_to_details(&duid);
        let (key, value) = &details[1];
        assert_eq!(key, "UUID");
        assert_eq!(&**value, "b130bab1-f4cf-4d16-be49-91b7967619b0");
    }

    #[test]
    fn ll_details() {
        let duid = Duid::Ll {
            hardware_type: ARP_HRD_ETHERNET,
            mac: MacAddress::BROADCAST,
        };
        let keys: Vec<String> = duid_to_details(&duid).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Type", "HwType", "MAC"]);
    }
}
