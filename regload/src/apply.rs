//! Map application
//!
//! Walks a validated table and issues one typed definition plus one pinned
//! label per descriptor. Additive and best-effort: one bad entry never
//! aborts the rest, and nothing is rolled back.

use crate::backend::{Backend, BackendError, BindOutcome, DefineOutcome};
use crate::table::RegisterDescriptor;
use crate::validate::ValidatedTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// At least one of the two steps changed backend state.
    Applied,
    /// Definition and label were both already present, identically.
    Skipped,
    /// The backend rejected the definition or the label.
    Failed(BackendError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub name: String,
    pub address: u32,
    pub status: EntryStatus,
}

/// Per-entry outcomes for a whole table, in table order. Every attempted
/// entry is accounted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    entries: Vec<EntryOutcome>,
}

impl ApplyReport {
    pub fn entries(&self) -> &[EntryOutcome] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn applied(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Applied))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, EntryStatus::Failed(_)))
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, EntryStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&EntryStatus) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.status)).count()
    }
}

/// Materializes every descriptor of the validated table in the backend.
///
/// Taking a [`ValidatedTable`] makes running against an unvalidated table
/// unrepresentable; there is no runtime contract check to trip.
pub fn apply(backend: &mut impl Backend, validated: ValidatedTable<'_>) -> ApplyReport {
    let mut report = ApplyReport::default();

    for reg in validated.table().entries() {
        let status = apply_entry(backend, reg);
        match &status {
            EntryStatus::Applied => log::debug!("applied {reg}"),
            EntryStatus::Skipped => log::debug!("{reg} already present"),
            EntryStatus::Failed(e) => log::warn!("{reg}: {e}"),
        }
        report.entries.push(EntryOutcome {
            name: reg.name().to_owned(),
            address: reg.address(),
            status,
        });
    }

    log::info!(
        "applied {}, skipped {}, failed {} of {} registers",
        report.applied(),
        report.skipped(),
        report.failed(),
        report.len()
    );

    report
}

fn apply_entry(backend: &mut impl Backend, reg: &RegisterDescriptor) -> EntryStatus {
    let defined = match backend.define_value(reg.address(), reg.width()) {
        Ok(outcome) => outcome,
        Err(e) => return EntryStatus::Failed(e),
    };

    let bound = match backend.bind_pinned_label(reg.address(), reg.name()) {
        Ok(outcome) => outcome,
        Err(e) => return EntryStatus::Failed(e),
    };

    match (defined, bound) {
        (DefineOutcome::AlreadyDefined, BindOutcome::AlreadyBound) => EntryStatus::Skipped,
        _ => EntryStatus::Applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem::MemBackend;
    use crate::provision::provision;
    use crate::table::{Permissions, RegionSpec, RegisterTable, Width};
    use crate::validate::validate;

    fn sfr() -> RegionSpec {
        RegionSpec {
            name: "sfr".into(),
            start: 0xFF_0000,
            length: 0xFC00,
            volatile: true,
            initialized: false,
            perms: Permissions { r: true, w: true, x: false },
        }
    }

    fn load(backend: &mut MemBackend, rows: &[(&str, u32, Width)]) -> ApplyReport {
        let regions = [sfr()];
        provision(backend, &regions).unwrap();
        let table = RegisterTable::from_rows(rows);
        let validated = validate(&table, &regions).unwrap();
        apply(backend, validated)
    }

    #[test]
    fn empty_table_is_a_noop() {
        let mut backend = MemBackend::new();
        let report = load(&mut backend, &[]);
        assert!(report.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn fresh_entries_are_applied() {
        let mut backend = MemBackend::new();
        let report = load(
            &mut backend,
            &[
                ("A_REG", 0xFF_4000, Width::Word),
                ("B_REG", 0xFF_4002, Width::Byte),
            ],
        );
        assert_eq!(report.applied(), 2);
        assert_eq!(backend.definition_at(0xFF_4000), Some(Width::Word));
        assert_eq!(backend.label_address("B_REG"), Some(0xFF_4002));
    }

    #[test]
    fn second_run_skips_everything() {
        let rows = [
            ("A_REG", 0xFF_4000, Width::Word),
            ("B_REG", 0xFF_4002, Width::Byte),
        ];
        let mut backend = MemBackend::new();
        load(&mut backend, &rows);
        let report = load(&mut backend, &rows);
        assert_eq!(report.skipped(), 2);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn aliases_apply_to_the_same_address() {
        let mut backend = MemBackend::new();
        let report = load(
            &mut backend,
            &[
                ("DIP_STACK_REG", 0xFF_6000, Width::Word),
                ("DIP_STACK_REG.STACK_REG", 0xFF_6000, Width::Word),
            ],
        );
        assert_eq!(report.applied(), 2);
        assert_eq!(backend.label_address("DIP_STACK_REG"), Some(0xFF_6000));
        assert_eq!(
            backend.label_address("DIP_STACK_REG.STACK_REG"),
            Some(0xFF_6000)
        );
    }

    #[test]
    fn one_bad_entry_does_not_abort_the_rest() {
        let mut backend = MemBackend::new();
        // Bind C_REG somewhere else first, so the table's C_REG entry fails
        // its label step.
        provision(&mut backend, &[sfr()]).unwrap();
        backend.bind_pinned_label(0xFF_4100, "C_REG").unwrap();

        let rows: Vec<(&str, u32, Width)> = (0..10)
            .map(|i| {
                let name: &str = match i {
                    4 => "C_REG",
                    _ => Box::leak(format!("R{i}_REG").into_boxed_str()),
                };
                (name, 0xFF_4000 + 2 * i, Width::Word)
            })
            .collect();

        let report = load(&mut backend, &rows);
        assert_eq!(report.len(), 10);
        assert_eq!(report.applied(), 9);
        assert_eq!(report.failed(), 1);
        let failure = report.failures().next().unwrap();
        assert_eq!(failure.name, "C_REG");
        assert!(matches!(
            failure.status,
            EntryStatus::Failed(BackendError::LabelBoundElsewhere { .. })
        ));
        // Entries after the failure still landed.
        assert_eq!(backend.label_address("R9_REG"), Some(0xFF_4012));
    }

    #[test]
    fn failed_define_leaves_no_label() {
        let mut backend = MemBackend::new();
        provision(&mut backend, &[sfr()]).unwrap();
        // Conflicting definition straddling where A_REG wants to go.
        backend.define_value(0xFF_4001, Width::Word).unwrap();

        let table = RegisterTable::from_rows(&[("A_REG", 0xFF_4000, Width::Word)]);
        let validated = validate(&table, &[sfr()]).unwrap();
        let report = apply(&mut backend, validated);

        assert_eq!(report.failed(), 1);
        assert_eq!(backend.label_address("A_REG"), None);
    }
}
