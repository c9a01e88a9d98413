use idmapper::bits::{clear_mark, has_mark, set_mark, BitField, COLLISION_MARK};

#[test]
fn field_get_set_round_trip() {
    let f = BitField::new(8, 8);
    let w = f.set(0, 0xCD);
    assert_eq!(f.get(w), 0xCD);
}

#[test]
fn field_set_preserves_surrounding_bits() {
    let f = BitField::new(0, 4);
    let w = 0xF0u64;
    assert_eq!(f.set(w, 0x3), 0xF3);
}

#[test]
fn collision_mark_field_is_bit_56() {
    assert_eq!(COLLISION_MARK.get(1u64 << 56), 1);
}

#[test]
fn mark_round_trips_without_disturbing_payload() {
    let payload = (1u64 << 56) - 1;
    let marked = set_mark(payload);
    assert!(has_mark(marked));
    assert_eq!(clear_mark(marked), payload);
}

#[test]
fn unmarked_value_reports_no_mark() {
    assert!(!has_mark(0xABCD));
}
