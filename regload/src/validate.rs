//! Address space validation
//!
//! Proves a register table internally consistent before any backend
//! mutation, so a foreseeable logical error can never leave the host
//! half-populated. All violations are collected, not just the first.

use std::fmt;

use crate::table::{RegionSpec, RegisterDescriptor, RegisterTable};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("register at 0x{address:06x} has an empty name")]
    EmptyName { address: u32 },

    #[error("name collision: {first} vs {second}")]
    NameCollision {
        first: RegisterDescriptor,
        second: RegisterDescriptor,
    },

    #[error("range overlap: {first} intersects {second}")]
    RangeOverlap {
        first: RegisterDescriptor,
        second: RegisterDescriptor,
    },

    #[error("{descriptor} is not contained in any declared region")]
    OutOfRegion { descriptor: RegisterDescriptor },
}

/// Aggregate validation failure. Fatal to the whole load; nothing has been
/// applied when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "register table failed validation with {} violation(s):",
            self.violations.len()
        )?;
        for v in &self.violations {
            writeln!(f, "  {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Proof that a table passed [`validate`] against a region set.
///
/// The applier takes this instead of the raw table, so it cannot be invoked
/// on an unvalidated one.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedTable<'t> {
    table: &'t RegisterTable,
}

impl<'t> ValidatedTable<'t> {
    pub fn table(&self) -> &'t RegisterTable {
        self.table
    }
}

/// Checks the table against the declared regions.
///
/// Two descriptors with the identical `(address, width)` but different
/// names are an intentional alias and pass; any other intersection of
/// ranges is an error. A name used twice with different placement is an
/// error.
pub fn validate<'t>(
    table: &'t RegisterTable,
    regions: &[RegionSpec],
) -> Result<ValidatedTable<'t>, ValidationErrors> {
    let mut violations = Vec::new();
    let entries = table.entries();

    for reg in entries {
        if reg.name().is_empty() {
            violations.push(Violation::EmptyName {
                address: reg.address(),
            });
        }
        if !regions.iter().any(|r| r.contains(&reg.range())) {
            violations.push(Violation::OutOfRegion {
                descriptor: reg.clone(),
            });
        }
    }

    // Pairwise scan; tables are a few hundred entries at most.
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            let aliased = a.address() == b.address() && a.width() == b.width();
            if aliased {
                continue;
            }
            if a.name() == b.name() && !a.name().is_empty() {
                violations.push(Violation::NameCollision {
                    first: a.clone(),
                    second: b.clone(),
                });
            }
            let (ra, rb) = (a.range(), b.range());
            if ra.start < rb.end && rb.start < ra.end {
                violations.push(Violation::RangeOverlap {
                    first: a.clone(),
                    second: b.clone(),
                });
            }
        }
    }

    if violations.is_empty() {
        Ok(ValidatedTable { table })
    } else {
        Err(ValidationErrors { violations })
    }
}
