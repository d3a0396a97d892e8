use std::path::Path;

use anyhow::Context;
use duidgen_common::config::DuidConfig;
use duidgen_common::identity::MachineId;
use duidgen_common::machine_id::{self, MACHINE_ID_PATH};
use duidgen_common::network::interface;
use duidgen_core::{Duid, DuidGenerator, DuidType};
use tracing::{info, warn};

use crate::commands::CommandLine;
use crate::terminal::print;

/// Label printed in front of every derived value.
const LABEL_PREFIX: &str = "systemd-networkd";

/// Turns the command line into the inputs of the derivations.
pub fn build_config(cli: &CommandLine) -> anyhow::Result<DuidConfig> {
    let mut cfg = DuidConfig::default();

    if let Some(mac) = cli.mac {
        cfg.mac = mac;
    } else if let Some(name) = &cli.interface {
        cfg.mac = interface::get_interface_mac(name)
            .with_context(|| format!("cannot take a MAC address from '{name}'"))?;
        info!("Using MAC {} of interface {name}", cfg.mac);
    }
    if let Some(hash_key) = cli.hash_key {
        cfg.hash_key = hash_key;
    }
    if let Some(application_id) = cli.application_id {
        cfg.application_id = application_id;
    }

    Ok(cfg)
}

/// Resolves the machine id, reading the identity file at most once.
fn load_machine_id(cli: &CommandLine) -> anyhow::Result<MachineId> {
    if let Some(machine_id) = cli.machine_id {
        return Ok(machine_id);
    }

    let path: &Path = cli
        .machine_id_file
        .as_deref()
        .unwrap_or(Path::new(MACHINE_ID_PATH));
    let machine_id = machine_id::read_machine_id(path)
        .with_context(|| format!("cannot load the machine id from {}", path.display()))?;
    info!("Loaded machine id from {}", path.display());

    Ok(machine_id)
}

/// Derives and prints the requested DUID types, in the order given.
pub fn derive(cli: &CommandLine, cfg: DuidConfig, types: &[DuidType]) -> anyhow::Result<()> {
    let generator = DuidGenerator::new(cfg);

    let needs_mac = types.iter().any(|t| !t.needs_machine_id());
    if needs_mac && generator.config().is_placeholder_mac() {
        warn!(
            "No MAC address given, link-layer DUIDs use the placeholder {}",
            generator.config().mac
        );
    }

    let machine_id: Option<MachineId> = if types.iter().any(|t| t.needs_machine_id()) {
        Some(load_machine_id(cli)?)
    } else {
        None
    };

    let duids: Vec<Duid> = types
        .iter()
        .map(|duid_type| generator.generate(*duid_type, machine_id.as_ref()))
        .collect::<Result<_, _>>()?;

    let labelled = types.len() > 1 && cli.quiet == 0;
    for line in render(&duids, labelled) {
        print::print(&line);
    }

    Ok(())
}

/// One output line per DUID, labelled with its variant or bare.
fn render(duids: &[Duid], labelled: bool) -> Vec<String> {
    duids
        .iter()
        .map(|duid| {
            if labelled {
                print::format_labelled(&label(duid.duid_type()), duid)
            } else {
                duid.to_string()
            }
        })
        .collect()
}

fn label(duid_type: DuidType) -> String {
    format!("{LABEL_PREFIX} {}", duid_type.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_output_is_four_labelled_lines() {
        colored::control::set_override(false);
        let machine_id: MachineId = "0123456789abcdef0123456789abcdef".parse().unwrap();
        let duids = DuidGenerator::default().generate_all(&machine_id).unwrap();

        assert_eq!(
            render(&duids, true),
            vec![
                "systemd-networkd DUID_LLT:   00:01:00:01:00:00:00:00:ff:ff:ff:ff:ff:ff",
                "systemd-networkd DUID_EN:    00:02:00:00:ab:11:a3:fc:e9:f5:ab:0f:de:de",
                "systemd-networkd DUID_LL:    00:03:00:01:ff:ff:ff:ff:ff:ff",
                "systemd-networkd DUID_UUID:  00:04:8b:af:2d:96:b4:a2:48:6c:9e:15:ce:ee:09:6b:5c:cd",
            ]
        );
    }

    #[test]
    fn quiet_output_is_bare_values() {
        let duid = duidgen_core::duid_ll(&"52:54:00:12:34:56".parse().unwrap());
        assert_eq!(render(&[duid], false), vec!["00:03:00:01:52:54:00:12:34:56"]);
    }

    #[test]
    fn label_names_the_variant() {
        assert_eq!(label(DuidType::Uuid), "systemd-networkd DUID_UUID");
    }

    #[test]
    fn config_takes_overrides() {
        let cli = CommandLine::try_parse_from([
            "duidgen",
            "--mac",
            "52:54:00:12:34:56",
            "--hash-key",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        let cfg = build_config(&cli).unwrap();
        assert_eq!(cfg.mac.to_string(), "52:54:00:12:34:56");
        assert_eq!(cfg.hash_key.to_string(), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(cfg.application_id, DuidConfig::default().application_id);
    }

    #[test]
    fn inline_machine_id_skips_the_file() {
        let cli = CommandLine::try_parse_from([
            "duidgen",
            "--machine-id",
            "0123456789abcdef0123456789abcdef",
        ])
        .unwrap();
        let machine_id = load_machine_id(&cli).unwrap();
        assert_eq!(machine_id.to_string(), "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn missing_machine_id_file_is_an_error() {
        let cli = CommandLine::try_parse_from([
            "duidgen",
            "--machine-id-file",
            "/nonexistent/duidgen/machine-id",
        ])
        .unwrap();
        let err = load_machine_id(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/duidgen/machine-id"));
    }
}
