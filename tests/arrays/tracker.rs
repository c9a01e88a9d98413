use idmapper::Tracker;

#[test]
fn identity_permutation_covers_every_slot() {
    let t = Tracker::identity(9);
    assert_eq!(t.size(), 10);
    for i in 0..10 {
        assert_eq!(t.get(i), i as u64);
    }
}

#[test]
fn width_switches_at_the_32_bit_boundary() {
    const TRACKER32_MAX_INTERNAL_ID: u64 = (1u64 << 32) - 2;
    let narrow = Tracker::identity(TRACKER32_MAX_INTERNAL_ID);
    assert_eq!(narrow.slot_width_bytes(), 4);

    let wide = Tracker::identity(TRACKER32_MAX_INTERNAL_ID + 1);
    assert_eq!(wide.slot_width_bytes(), 5);
}

#[test]
fn swap_exchanges_slots() {
    let mut t = Tracker::identity(3);
    t.swap(0, 3);
    assert_eq!(t.get(0), 3);
    assert_eq!(t.get(3), 0);
}

#[test]
fn empty_tracker_has_zero_size() {
    let t = Tracker::empty();
    assert_eq!(t.size(), 0);
}
