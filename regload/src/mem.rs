//! In-memory reference backend
//!
//! The local, synchronous, single-writer store the loader is designed
//! against. Used by the unit tests and by `regtool`; a real host tool
//! supplies its own [`Backend`] over its project database instead.

use std::collections::{BTreeMap, HashMap};

use crate::backend::{
    Backend, BackendError, BindOutcome, DefineOutcome, RegionHandle, RegionInfo,
};
use crate::table::{RegionSpec, Width};

#[derive(Debug, Default)]
pub struct MemBackend {
    regions: Vec<RegionSpec>,
    // address -> scalar width; entries never overlap each other
    definitions: BTreeMap<u32, Width>,
    labels: HashMap<String, u32>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scalar defined exactly at `address`, if any.
    pub fn definition_at(&self, address: u32) -> Option<Width> {
        self.definitions.get(&address).copied()
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn label_address(&self, name: &str) -> Option<u32> {
        self.labels.get(name).copied()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    fn region_index_containing(&self, address: u32) -> Option<usize> {
        self.regions
            .iter()
            .position(|r| r.range().contains(&(address as u64)))
    }
}

impl Backend for MemBackend {
    fn create_region(&mut self, spec: &RegionSpec) -> Result<RegionHandle, BackendError> {
        if self.regions.iter().any(|r| r.name == spec.name) {
            return Err(BackendError::RegionExists {
                name: spec.name.clone(),
            });
        }
        if let Some(other) = self.regions.iter().find(|r| {
            let (a, b) = (r.range(), spec.range());
            a.start < b.end && b.start < a.end
        }) {
            return Err(BackendError::RegionOverlap {
                name: spec.name.clone(),
                other: other.name.clone(),
            });
        }

        self.regions.push(spec.clone());
        Ok(RegionHandle(self.regions.len() as u32 - 1))
    }

    fn region_named(&self, name: &str) -> Option<RegionInfo> {
        self.regions
            .iter()
            .position(|r| r.name == name)
            .map(|i| RegionInfo {
                handle: RegionHandle(i as u32),
                start: self.regions[i].start,
                length: self.regions[i].length,
            })
    }

    fn region_containing(&self, address: u32) -> Option<RegionHandle> {
        self.region_index_containing(address)
            .map(|i| RegionHandle(i as u32))
    }

    fn define_value(&mut self, address: u32, width: Width) -> Result<DefineOutcome, BackendError> {
        let start = address as u64;
        let end = start + width.bytes() as u64;

        let region = self
            .region_index_containing(address)
            .map(|i| &self.regions[i])
            .ok_or(BackendError::Unmapped { address })?;
        if region.range().end < end {
            return Err(BackendError::Unmapped { address });
        }

        // Only definitions starting at most three bytes below `address` can
        // reach into the range; the widest scalar is four bytes.
        for (&at, &existing) in self.definitions.range(address.saturating_sub(3)..) {
            let (ds, de) = (at as u64, at as u64 + existing.bytes() as u64);
            if ds >= end {
                break;
            }
            if de <= start {
                continue;
            }
            if at == address && existing == width {
                return Ok(DefineOutcome::AlreadyDefined);
            }
            return Err(BackendError::ConflictingDefinition {
                address,
                requested: width,
                defined_at: at,
                existing,
            });
        }

        self.definitions.insert(address, width);
        Ok(DefineOutcome::Defined)
    }

    fn bind_pinned_label(
        &mut self,
        address: u32,
        name: &str,
    ) -> Result<BindOutcome, BackendError> {
        match self.labels.get(name) {
            Some(&bound_at) if bound_at == address => Ok(BindOutcome::AlreadyBound),
            Some(&bound_at) => Err(BackendError::LabelBoundElsewhere {
                name: name.to_owned(),
                bound_at,
            }),
            None => {
                self.labels.insert(name.to_owned(), address);
                Ok(BindOutcome::Bound)
            }
        }
    }
}
