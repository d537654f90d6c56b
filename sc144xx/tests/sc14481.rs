//! Loads the full SC14481 table into a fresh memory model.

use regload::{MemBackend, Width, apply, provision, validate};

#[test]
fn full_table_loads_clean() {
    let regions = sc144xx::regions();
    let table = sc144xx::table();
    let mut backend = MemBackend::new();

    provision(&mut backend, &regions).unwrap();
    let report = apply(&mut backend, validate(&table, &regions).unwrap());

    assert_eq!(report.len(), 290);
    assert_eq!(report.applied(), 290);
    assert!(report.is_clean());

    // The alias pair shares one definition, so there is one fewer scalar
    // than there are labels.
    assert_eq!(backend.label_count(), 290);
    assert_eq!(backend.definition_count(), 289);
}

#[test]
fn reload_skips_every_register() {
    let regions = sc144xx::regions();
    let table = sc144xx::table();
    let mut backend = MemBackend::new();

    provision(&mut backend, &regions).unwrap();
    apply(&mut backend, validate(&table, &regions).unwrap());
    let report = apply(&mut backend, validate(&table, &regions).unwrap());

    assert_eq!(report.skipped(), table.len());
    assert_eq!(report.failed(), 0);
}

#[test]
fn known_registers_are_where_the_datasheet_puts_them() {
    let regions = sc144xx::regions();
    let table = sc144xx::table();
    let mut backend = MemBackend::new();

    provision(&mut backend, &regions).unwrap();
    apply(&mut backend, validate(&table, &regions).unwrap());

    assert_eq!(backend.label_address("CLK_AMBA_REG"), Some(0xFF_4000));
    assert_eq!(backend.label_address("WATCHDOG_REG"), Some(0xFF_4C00));
    assert_eq!(backend.label_address("DIP_STACK_REG"), Some(0xFF_6000));
    assert_eq!(
        backend.label_address("DIP_STACK_REG.STACK_REG"),
        Some(0xFF_6000)
    );
    assert_eq!(backend.definition_at(0xFF_FBF8), Some(Width::Byte));
    assert_eq!(backend.definition_at(0xFF_4000), Some(Width::Word));
}
