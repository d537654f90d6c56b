//! Declarative hardware register map loader.
//!
//! Takes a table of `(name, address, width)` register descriptors and
//! materializes it against an addressable-memory backend in three phases:
//! provision the regions, validate the table against them, then stamp one
//! typed definition plus one pinned label per descriptor.
//!
//! ```
//! use regload::{
//!     MemBackend, Permissions, RegionSpec, RegisterTable, Width, apply, provision, validate,
//! };
//!
//! let regions = [RegionSpec {
//!     name: "sfr".into(),
//!     start: 0xFF_0000,
//!     length: 0xFC00,
//!     volatile: true,
//!     initialized: false,
//!     perms: Permissions { r: true, w: true, x: false },
//! }];
//! let table = RegisterTable::from_rows(&[
//!     ("CLK_AMBA_REG", 0xFF_4000, Width::Word),
//!     ("WATCHDOG_REG", 0xFF_4C00, Width::Word),
//! ]);
//!
//! let mut backend = MemBackend::new();
//! provision(&mut backend, &regions).unwrap();
//! let validated = validate(&table, &regions).unwrap();
//! let report = apply(&mut backend, validated);
//! assert!(report.is_clean());
//! ```

pub mod apply;
pub mod backend;
pub mod mem;
pub mod provision;
pub mod table;
pub mod validate;

pub use apply::{ApplyReport, EntryOutcome, EntryStatus, apply};
pub use backend::{Backend, BackendError, BindOutcome, DefineOutcome, RegionHandle, RegionInfo};
pub use mem::MemBackend;
pub use provision::{ProvisionError, ProvisionReport, ProvisionedRegion, RegionOutcome, provision};
pub use table::{InvalidWidth, Permissions, RegionSpec, RegisterDescriptor, RegisterTable, Width};
pub use validate::{ValidatedTable, ValidationErrors, Violation, validate};
