//! Host backend contract
//!
//! The loader is a library consumed by a host tool that owns the actual
//! memory model and symbol table (a disassembler project, an emulator's
//! address space, ...). This is the narrow surface the loader needs from it.

use crate::table::{RegionSpec, Width};

/// Opaque backend-assigned region identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle(pub u32);

/// Bounds of an existing region, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub handle: RegionHandle,
    pub start: u32,
    pub length: u32,
}

/// Whether `define_value` created a definition or found an identical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineOutcome {
    Defined,
    AlreadyDefined,
}

/// Whether `bind_pinned_label` created a binding or found an identical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Bound,
    AlreadyBound,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("address 0x{address:06x} is not inside any region")]
    Unmapped { address: u32 },

    #[error("region {name:?} already exists")]
    RegionExists { name: String },

    #[error("region {name:?} overlaps existing region {other:?}")]
    RegionOverlap { name: String, other: String },

    #[error("{requested} at 0x{address:06x} conflicts with existing {existing} at 0x{defined_at:06x}")]
    ConflictingDefinition {
        address: u32,
        requested: Width,
        defined_at: u32,
        existing: Width,
    },

    #[error("label {name:?} is already bound to 0x{bound_at:06x}")]
    LabelBoundElsewhere { name: String, bound_at: u32 },
}

/// Host-side addressable memory model and symbol table.
///
/// Assumed local, synchronous and single-writer for the duration of one
/// provision/validate/apply sequence.
pub trait Backend {
    /// Creates a region. Fails if the name is taken or the span overlaps an
    /// existing region.
    fn create_region(&mut self, spec: &RegionSpec) -> Result<RegionHandle, BackendError>;

    /// Looks up an existing region by name.
    fn region_named(&self, name: &str) -> Option<RegionInfo>;

    /// The region containing `address`, if any.
    fn region_containing(&self, address: u32) -> Option<RegionHandle>;

    /// Types `width` contiguous bytes starting at `address` as one scalar.
    ///
    /// An identical existing definition reports `AlreadyDefined`; a
    /// different definition intersecting the range is an error, as is an
    /// address outside every region.
    fn define_value(&mut self, address: u32, width: Width) -> Result<DefineOutcome, BackendError>;

    /// Binds `name` to `address` as a pinned (non-relocatable) label.
    ///
    /// Fails if the name is already bound to a different address. Several
    /// names on one address are fine.
    fn bind_pinned_label(&mut self, address: u32, name: &str)
    -> Result<BindOutcome, BackendError>;
}
