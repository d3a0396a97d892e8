pub mod decode;
pub mod derive;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use duidgen_common::identity::{ApplicationId, HashKey, MachineId};
use duidgen_common::network::mac::MacAddress;
use duidgen_core::Duid;

#[derive(Parser)]
#[command(name = "duidgen")]
#[command(about = "Derive the DHCPv6 DUIDs systemd-networkd would use for this host.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// MAC address for the link-layer DUIDs (defaults to ff:ff:ff:ff:ff:ff)
    #[arg(short, long, global = true, conflicts_with = "interface")]
    pub mac: Option<MacAddress>,

    /// Take the MAC address from this network interface
    #[arg(short, long, global = true)]
    pub interface: Option<String>,

    /// File holding the 32 hex digit machine id [default: /etc/machine-id]
    #[arg(long, global = true, value_name = "PATH")]
    pub machine_id_file: Option<PathBuf>,

    /// Machine id as 32 hex digits, instead of reading it from a file
    #[arg(long, global = true, value_name = "HEX", conflicts_with = "machine_id_file")]
    pub machine_id: Option<MachineId>,

    /// SipHash key for DUID-EN
    #[arg(long, global = true, value_name = "HEX")]
    pub hash_key: Option<HashKey>,

    /// Application id for DUID-UUID
    #[arg(long = "app-id", global = true, value_name = "HEX")]
    pub application_id: Option<ApplicationId>,

    /// Print bare values without labels
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Never colorize output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Print every DUID type (the default)
    #[command(alias = "a")]
    All,
    /// Print the DUID-LLT (link-layer address plus time)
    Llt,
    /// Print the DUID-EN (enterprise number)
    En,
    /// Print the DUID-LL (link-layer address)
    Ll,
    /// Print the DUID-UUID
    Uuid,
    /// Show the fields of an existing DUID
    #[command(alias = "d")]
    Decode { duid: Duid },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
