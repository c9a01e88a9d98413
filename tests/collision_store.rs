use idmapper::bits::set_mark;
use idmapper::collision_store::CollisionStore;
use idmapper::{GroupArray, GroupStore, LongArray, VecCollector, WorkerPool};

fn marked(eids: &[u64]) -> LongArray {
    let mut data = LongArray::new();
    for (i, &e) in eids.iter().enumerate() {
        data.set(i, set_mark(e));
    }
    data
}

#[test]
fn collects_every_marked_internal_id() {
    let data = marked(&[11, 22, 33]);
    let store = CollisionStore::collect(&data, 3, |id| format!("input-{id}"));
    assert_eq!(store.len(), 3);
    assert_eq!(store.input_id_for(2), Some(&"input-2".to_string()));
    assert_eq!(store.input_id_for(99), None);
}

#[test]
fn empty_store_reports_nothing() {
    let data = LongArray::new();
    let store = CollisionStore::<String>::collect(&data, 0, |id| format!("input-{id}"));
    assert!(store.is_empty());
}

#[test]
fn reports_a_repeated_input_within_the_same_group_once() {
    let data = marked(&[500, 500]);
    let mut groups = GroupArray::new();
    groups.set(0, 0);
    groups.set(1, 0);
    let group_store = GroupStore::new();
    let store = CollisionStore::collect(&data, 2, |_| "same-input".to_string());
    let collector: VecCollector<String> = VecCollector::new();
    let pool = WorkerPool::with_workers(2);
    store.detect_duplicates(&data, &groups, &group_store, &collector, &pool);
    assert_eq!(collector.reports().len(), 1);
}

#[test]
fn does_not_report_across_different_groups() {
    let data = marked(&[500, 500]);
    let mut groups = GroupArray::new();
    groups.set(0, 0);
    groups.set(1, 1);
    let group_store = GroupStore::new();
    let store = CollisionStore::collect(&data, 2, |_| "same-input".to_string());
    let collector: VecCollector<String> = VecCollector::new();
    let pool = WorkerPool::with_workers(2);
    store.detect_duplicates(&data, &groups, &group_store, &collector, &pool);
    assert!(collector.reports().is_empty());
}
