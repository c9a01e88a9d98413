use idmapper::{LongArray, MemoryTotals, MemoryVisitor, GAP};

#[test]
fn unset_slots_read_as_gap() {
    let a = LongArray::new();
    assert_eq!(a.get(12345), GAP);
}

#[test]
fn set_then_get_round_trip() {
    let mut a = LongArray::new();
    a.set(100, 0xDEAD_BEEF_CAFE);
    assert_eq!(a.get(100), 0xDEAD_BEEF_CAFE);
    assert_eq!(a.get(99), GAP);
}

#[test]
fn with_capacity_reports_full_logical_size() {
    let a = LongArray::with_capacity(10_000);
    assert_eq!(a.size(), 10_000);
}

#[test]
fn swap_exchanges_values() {
    let mut a = LongArray::new();
    a.set(0, 7);
    a.set(1, 9);
    a.swap(0, 1);
    assert_eq!(a.get(0), 9);
    assert_eq!(a.get(1), 7);
}

#[test]
fn accept_reports_under_the_data_cache_name() {
    let mut a = LongArray::new();
    a.set(0, 1);
    let mut totals = MemoryTotals::default();
    a.accept(&mut totals);
    assert!(totals.per_array.iter().any(|(name, _, _)| *name == "data_cache"));
}
