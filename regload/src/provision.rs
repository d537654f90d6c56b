//! Region provisioning
//!
//! Ensures each region a table needs exists in the backend exactly once,
//! before validation and application run.

use crate::backend::{Backend, BackendError, RegionHandle};
use crate::table::RegionSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOutcome {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedRegion {
    pub name: String,
    pub handle: RegionHandle,
    pub outcome: RegionOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    regions: Vec<ProvisionedRegion>,
}

impl ProvisionReport {
    pub fn regions(&self) -> &[ProvisionedRegion] {
        &self.regions
    }

    pub fn handle(&self, name: &str) -> Option<RegionHandle> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.handle)
    }

    pub fn created(&self) -> usize {
        self.count(RegionOutcome::Created)
    }

    pub fn already_present(&self) -> usize {
        self.count(RegionOutcome::AlreadyPresent)
    }

    fn count(&self, outcome: RegionOutcome) -> usize {
        self.regions.iter().filter(|r| r.outcome == outcome).count()
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// A region of this name exists with different bounds. The existing
    /// region is left untouched; its identity is ambiguous, which makes the
    /// whole load unsafe to continue.
    #[error(
        "region {name:?} already exists as 0x{existing_start:06x}+0x{existing_length:x}, \
         requested 0x{requested_start:06x}+0x{requested_length:x}"
    )]
    BoundsConflict {
        name: String,
        existing_start: u32,
        existing_length: u32,
        requested_start: u32,
        requested_length: u32,
    },

    #[error("could not create region {name:?}: {source}")]
    Backend { name: String, source: BackendError },
}

/// Creates every region in `regions` that does not already exist.
///
/// Idempotent: a region already present with identical bounds is reported
/// as `AlreadyPresent` and left alone. Fatal on the first conflict; no
/// table entry has been touched at that point.
pub fn provision(
    backend: &mut impl Backend,
    regions: &[RegionSpec],
) -> Result<ProvisionReport, ProvisionError> {
    let mut report = ProvisionReport::default();

    for spec in regions {
        let provisioned = match backend.region_named(&spec.name) {
            Some(info) if info.start == spec.start && info.length == spec.length => {
                log::debug!("region {:?} already present", spec.name);
                ProvisionedRegion {
                    name: spec.name.clone(),
                    handle: info.handle,
                    outcome: RegionOutcome::AlreadyPresent,
                }
            }
            Some(info) => {
                return Err(ProvisionError::BoundsConflict {
                    name: spec.name.clone(),
                    existing_start: info.start,
                    existing_length: info.length,
                    requested_start: spec.start,
                    requested_length: spec.length,
                });
            }
            None => {
                let handle =
                    backend
                        .create_region(spec)
                        .map_err(|source| ProvisionError::Backend {
                            name: spec.name.clone(),
                            source,
                        })?;
                log::debug!(
                    "created region {:?} at 0x{:06x} ({} bytes)",
                    spec.name,
                    spec.start,
                    spec.length
                );
                ProvisionedRegion {
                    name: spec.name.clone(),
                    handle,
                    outcome: RegionOutcome::Created,
                }
            }
        };
        report.regions.push(provisioned);
    }

    Ok(report)
}
