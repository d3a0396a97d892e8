use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::IdentityError;
use crate::identity::MachineId;

/// Where the host identity lives on systemd machines.
pub const MACHINE_ID_PATH: &str = "/etc/machine-id";

/// Reads and parses the machine id stored at `path`.
///
/// The file is read once; I/O failures surface as [`IdentityError::Io`],
/// malformed content as the usual hex/length errors.
pub fn read_machine_id(path: &Path) -> Result<MachineId, IdentityError> {
    let content = fs::read_to_string(path).map_err(|source| IdentityError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes of machine id from {}", content.len(), path.display());

    content.parse()
}
