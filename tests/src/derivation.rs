#![cfg(test)]
use duidgen_common::config::DuidConfig;
use duidgen_common::identity::MachineId;
use duidgen_common::network::mac::MacAddress;
use duidgen_common::utils::colon_hex;
use duidgen_core::derive::{generate_duid_en, generate_duid_ll, generate_duid_llt, generate_duid_uuid};
use duidgen_core::{Duid, DuidGenerator, DuidType};

const HASH_KEY: &str = "80118cc2fe4a03ee3ed60c6f363914090a";
const APP_ID: &str = "a50ad112bf604577a2fb741ab1955b03";
const MACHINE_ID: &str = "0123456789abcdef0123456789abcdef";

/*************************************************************
                   Default inputs, all four
**************************************************************/

#[test]
fn default_configuration_matches_text_entry_points() -> anyhow::Result<()> {
    let machine_id: MachineId = MACHINE_ID.parse()?;
    let duids: Vec<Duid> = DuidGenerator::default().generate_all(&machine_id)?;
    let rendered: Vec<String> = duids.iter().map(Duid::to_string).collect();

    assert_eq!(
        rendered,
        vec![
            generate_duid_llt("ff:ff:ff:ff:ff:ff")?,
            generate_duid_en(MACHINE_ID, HASH_KEY)?,
            generate_duid_ll("ff:ff:ff:ff:ff:ff")?,
            generate_duid_uuid(MACHINE_ID, APP_ID)?,
        ]
    );
    assert_eq!(rendered[0], "00:01:00:01:00:00:00:00:ff:ff:ff:ff:ff:ff");
    assert_eq!(rendered[2], "00:03:00:01:ff:ff:ff:ff:ff:ff");
    Ok(())
}

#[test]
fn every_derived_duid_decodes_back() -> anyhow::Result<()> {
    let machine_id: MachineId = MACHINE_ID.parse()?;
    let generator = DuidGenerator::new(DuidConfig {
        mac: "52:54:00:9a:bc:de".parse()?,
        ..DuidConfig::default()
    });

    for duid in generator.generate_all(&machine_id)? {
        let text = duid.to_string();
        let parsed: Duid = text.parse()?;
        assert_eq!(parsed, duid);
        assert_eq!(
            colon_hex::decode_colon_hex("DUID", &text)?.len(),
            duid.duid_type().encoded_len()
        );
    }
    Ok(())
}

/*************************************************************
                  Outputs depend only on inputs
**************************************************************/

#[test]
fn mac_only_changes_link_layer_types() -> anyhow::Result<()> {
    let machine_id: MachineId = MACHINE_ID.parse()?;
    let a = DuidGenerator::default().generate_all(&machine_id)?;
    let b = DuidGenerator::new(DuidConfig {
        mac: MacAddress::new([0x02, 0, 0, 0, 0, 1]),
        ..DuidConfig::default()
    })
    .generate_all(&machine_id)?;

    for (x, y) in a.iter().zip(b.iter()) {
        if x.duid_type().needs_machine_id() {
            assert_eq!(x, y);
        } else {
            assert_ne!(x, y);
        }
    }
    Ok(())
}

#[test]
fn machine_id_changes_hashed_types() -> anyhow::Result<()> {
    let generator = DuidGenerator::default();
    let one: MachineId = MACHINE_ID.parse()?;
    let two: MachineId = "00000000000000000000000000000000".parse()?;

    for duid_type in [DuidType::En, DuidType::Uuid] {
        assert_ne!(
            generator.generate(duid_type, Some(&one))?,
            generator.generate(duid_type, Some(&two))?
        );
    }
    Ok(())
}
