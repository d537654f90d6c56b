//! End-to-end loads against the in-memory backend.

use regload::{
    Backend, MemBackend, Permissions, ProvisionError, RegionSpec, RegisterTable, Width, apply,
    provision, validate,
};

fn regions() -> Vec<RegionSpec> {
    vec![RegionSpec {
        name: "sfr".into(),
        start: 0xFF_0000,
        length: 0xFC00,
        volatile: true,
        initialized: false,
        perms: Permissions { r: true, w: true, x: false },
    }]
}

fn rows() -> Vec<(&'static str, u32, Width)> {
    vec![
        ("CLK_AMBA_REG", 0xFF_4000, Width::Word),
        ("DMA0_INT_REG", 0xFF_4408, Width::Word),
        ("DIP_STACK_REG", 0xFF_6000, Width::Word),
        ("DIP_STACK_REG.STACK_REG", 0xFF_6000, Width::Word),
        ("CHIP_ID1_REG", 0xFF_FBF8, Width::Byte),
    ]
}

#[test]
fn load_twice_is_idempotent() {
    let regions = regions();
    let table = RegisterTable::from_rows(&rows());
    let mut backend = MemBackend::new();

    provision(&mut backend, &regions).unwrap();
    let report = apply(&mut backend, validate(&table, &regions).unwrap());
    assert_eq!(report.applied(), table.len());
    assert!(report.is_clean());

    let defs = backend.definition_count();
    let labels = backend.label_count();

    // Same sequence again: regions already present, every entry skipped,
    // backend unchanged.
    let second = provision(&mut backend, &regions).unwrap();
    assert_eq!(second.already_present(), regions.len());
    let report = apply(&mut backend, validate(&table, &regions).unwrap());
    assert_eq!(report.skipped(), table.len());
    assert_eq!(report.failed(), 0);
    assert_eq!(backend.definition_count(), defs);
    assert_eq!(backend.label_count(), labels);
}

#[test]
fn alias_pair_shares_one_definition() {
    let regions = regions();
    let table = RegisterTable::from_rows(&rows());
    let mut backend = MemBackend::new();

    provision(&mut backend, &regions).unwrap();
    apply(&mut backend, validate(&table, &regions).unwrap());

    // Two labels, one scalar at 0xFF_6000.
    assert_eq!(backend.definition_at(0xFF_6000), Some(Width::Word));
    assert_eq!(backend.label_address("DIP_STACK_REG"), Some(0xFF_6000));
    assert_eq!(
        backend.label_address("DIP_STACK_REG.STACK_REG"),
        Some(0xFF_6000)
    );
    assert_eq!(backend.definition_count(), rows().len() - 1);
}

#[test]
fn invalid_table_is_never_applied() {
    let regions = regions();
    let mut bad = rows();
    bad.push(("STRAY_REG", 0x00_8000, Width::Word));
    let table = RegisterTable::from_rows(&bad);

    let mut backend = MemBackend::new();
    provision(&mut backend, &regions).unwrap();

    let errors = validate(&table, &regions).unwrap_err();
    assert_eq!(errors.violations().len(), 1);
    // No way to reach apply without an Ok validation; the backend stays
    // empty.
    assert_eq!(backend.definition_count(), 0);
    assert_eq!(backend.label_count(), 0);
}

#[test]
fn region_identity_conflict_stops_the_load() {
    let mut backend = MemBackend::new();
    provision(&mut backend, &regions()).unwrap();

    let mut shifted = regions();
    shifted[0].start = 0xFE_0000;
    let err = provision(&mut backend, &shifted).unwrap_err();
    assert!(matches!(err, ProvisionError::BoundsConflict { .. }));
    assert_eq!(backend.definition_count(), 0);
}

#[test]
fn mid_table_failure_accounts_for_every_entry() {
    let regions = regions();
    let mut backend = MemBackend::new();
    provision(&mut backend, &regions).unwrap();
    // Pre-bind the third entry's name to a different address.
    backend.bind_pinned_label(0xFF_7000, "DIP_STACK_REG").unwrap();

    let table = RegisterTable::from_rows(&rows());
    let report = apply(&mut backend, validate(&table, &regions).unwrap());

    assert_eq!(report.len(), table.len());
    assert_eq!(report.failed(), 1);
    assert_eq!(report.applied(), table.len() - 1);
    assert_eq!(report.failures().next().unwrap().name, "DIP_STACK_REG");
    // The entry after the failed one still landed.
    assert_eq!(
        backend.label_address("DIP_STACK_REG.STACK_REG"),
        Some(0xFF_6000)
    );
}
