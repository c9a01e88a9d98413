use idmapper::{GroupArray, MemoryTotals, MemoryVisitor};

#[test]
fn unset_slots_read_as_no_group() {
    let a = GroupArray::new();
    assert_eq!(a.get(0), u16::MAX);
}

#[test]
fn set_then_get_round_trip() {
    let mut a = GroupArray::new();
    a.set(5, 3);
    assert_eq!(a.get(5), 3);
    assert_eq!(a.get(4), u16::MAX);
}

#[test]
fn accept_reports_under_the_group_cache_name() {
    let mut a = GroupArray::new();
    a.set(0, 1);
    let mut totals = MemoryTotals::default();
    a.accept(&mut totals);
    assert!(totals.per_array.iter().any(|(name, _, _)| *name == "group_cache"));
}
