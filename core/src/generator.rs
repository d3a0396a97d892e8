use duidgen_common::config::DuidConfig;
use duidgen_common::identity::MachineId;
use tracing::debug;

use crate::derive;
use crate::duid::{Duid, DuidType};
use crate::error::DuidError;

/// Binds a [`DuidConfig`] to the four derivations.
#[derive(Debug, Clone, Default)]
pub struct DuidGenerator {
    config: DuidConfig,
}

impl DuidGenerator {
    pub fn new(config: DuidConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DuidConfig {
        &self.config
    }

    /// Derives one DUID.
    ///
    /// `machine_id` may be `None` for the link-layer types; EN and UUID fail
    /// with [`DuidError::MissingMachineId`] without it.
    pub fn generate(
        &self,
        duid_type: DuidType,
        machine_id: Option<&MachineId>,
    ) -> Result<Duid, DuidError> {
        let duid = match duid_type {
            DuidType::Llt => derive::duid_llt(&self.config.mac),
            DuidType::Ll => derive::duid_ll(&self.config.mac),
            DuidType::En => {
                let machine_id = machine_id.ok_or(DuidError::MissingMachineId(duid_type))?;
                derive::duid_en(machine_id, &self.config.hash_key)
            }
            DuidType::Uuid => {
                let machine_id = machine_id.ok_or(DuidError::MissingMachineId(duid_type))?;
                derive::duid_uuid(machine_id, &self.config.application_id)
            }
        };
        debug!("Derived {duid_type}: {duid}");

        Ok(duid)
    }

    /// Derives every type, in LLT, EN, LL, UUID order.
    pub fn generate_all(&self, machine_id: &MachineId) -> Result<Vec<Duid>, DuidError> {
        DuidType::ALL
            .iter()
            .map(|duid_type| self.generate(*duid_type, Some(machine_id)))
            .collect()
    }
}
