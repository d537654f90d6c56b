//! Register table model

use std::fmt;
use std::ops::Range;

/// Scalar width of a hardware register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Byte,
    Word,
    DWord,
}

impl Width {
    pub fn bytes(self) -> u32 {
        match self {
            Width::Byte => 1,
            Width::Word => 2,
            Width::DWord => 4,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Byte => write!(f, "u8"),
            Width::Word => write!(f, "u16"),
            Width::DWord => write!(f, "u32"),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid register width {0} (expected 1, 2 or 4 bytes)")]
pub struct InvalidWidth(pub u32);

impl TryFrom<u32> for Width {
    type Error = InvalidWidth;

    fn try_from(bytes: u32) -> Result<Self, InvalidWidth> {
        match bytes {
            1 => Ok(Width::Byte),
            2 => Ok(Width::Word),
            4 => Ok(Width::DWord),
            n => Err(InvalidWidth(n)),
        }
    }
}

/// One named, fixed-width value at a fixed address.
///
/// Descriptors are load-time configuration; they are built once and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDescriptor {
    name: String,
    address: u32,
    width: Width,
}

impl RegisterDescriptor {
    pub fn new(name: impl Into<String>, address: u32, width: Width) -> Self {
        Self {
            name: name.into(),
            address,
            width,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// Occupied byte range `[address, address + width)`.
    ///
    /// Computed in u64 so a wide register at the very top of the address
    /// space does not wrap.
    pub fn range(&self) -> Range<u64> {
        let start = self.address as u64;
        start..start + self.width.bytes() as u64
    }
}

impl fmt::Display for RegisterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:06x} ({})", self.name, self.address, self.width)
    }
}

/// Ordered, read-only sequence of register descriptors.
///
/// Entry order is the definition order; entries are independent of each
/// other. An empty table is valid and loads as a no-op.
#[derive(Debug, Clone, Default)]
pub struct RegisterTable {
    entries: Vec<RegisterDescriptor>,
}

impl RegisterTable {
    pub fn new(entries: Vec<RegisterDescriptor>) -> Self {
        Self { entries }
    }

    /// Builds a table from a literal `(name, address, width)` row list, the
    /// form chip database crates use.
    pub fn from_rows(rows: &[(&str, u32, Width)]) -> Self {
        rows.iter()
            .map(|&(name, address, width)| RegisterDescriptor::new(name, address, width))
            .collect()
    }

    pub fn entries(&self) -> &[RegisterDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RegisterDescriptor> for RegisterTable {
    fn from_iter<I: IntoIterator<Item = RegisterDescriptor>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub r: bool,
    pub w: bool,
    pub x: bool,
}

/// Loader-side description of a memory region to be provisioned in the
/// backend. The backend owns the region once it exists; the loader never
/// tracks its lifecycle afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpec {
    pub name: String,
    pub start: u32,
    pub length: u32,
    pub volatile: bool,
    pub initialized: bool,
    pub perms: Permissions,
}

impl RegionSpec {
    pub fn range(&self) -> Range<u64> {
        let start = self.start as u64;
        start..start + self.length as u64
    }

    /// Whether `range` lies fully inside this region.
    pub fn contains(&self, range: &Range<u64>) -> bool {
        let own = self.range();
        own.start <= range.start && range.end <= own.end
    }
}
