use idmapper::radix::{radix_code, RadixIndex, SortBucketTable};
use idmapper::LongArray;

#[test]
fn radix_code_is_the_top_seven_bits() {
    let eid = 0b0010110u64 << 57;
    assert_eq!(radix_code(eid), 0b0010110);
}

#[test]
fn radix_code_ignores_the_collision_mark_bit() {
    let eid = (0b0000011u64 << 57) | (1 << 56);
    assert_eq!(radix_code(eid), 0b0000011);
}

#[test]
fn bucket_bounds_partition_the_whole_array() {
    let mut data = LongArray::new();
    data.set(0, 1u64 << 57);
    data.set(1, 2u64 << 57);
    data.set(2, 2u64 << 57);
    let mut radix = RadixIndex::new();
    radix.populate(&data, 3);
    let bounds = radix.bucket_bounds();
    assert_eq!(*bounds.last().unwrap(), 3);
    let table = SortBucketTable::from_bounds(bounds);
    assert_eq!(table.zoom(1), (0, 1));
    assert_eq!(table.zoom(2), (1, 3));
    assert_eq!(table.total_len(), 3);
}

#[test]
fn absent_radix_code_zooms_to_an_empty_range() {
    let mut data = LongArray::new();
    data.set(0, 1u64 << 57);
    let mut radix = RadixIndex::new();
    radix.populate(&data, 1);
    let table = SortBucketTable::from_bounds(radix.bucket_bounds());
    let (low, high) = table.zoom(99);
    assert_eq!(low, high);
}
