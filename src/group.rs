//! Group / group store.
//!
//! A group is a namespace for input identifiers: `(input_id, group)` is the
//! effective key the mapper resolves. Groups are identified by a 16-bit id
//! at the data-model level; `GroupStore` remembers each id's display name
//! the first time it is seen, purely for error reporting (the `Collector`
//! contract wants a group *name*, not just its id).

use crate::config::GROUPS_MAX;
use std::collections::HashMap;

/// A namespace for input identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u16,
    pub name: String,
}

impl Group {
    pub fn new(id: u16, name: impl Into<String>) -> Self {
        Group {
            id,
            name: name.into(),
        }
    }
}

/// Fixed upper bound on the number of distinct groups.
pub struct Groups;

impl Groups {
    pub const MAX: u32 = GROUPS_MAX;
}

/// Remembers each group id's display name, populated lazily as `put` first
/// sees a given group.
#[derive(Debug, Default, Clone)]
pub struct GroupStore {
    names: HashMap<u16, String>,
}

impl GroupStore {
    pub fn new() -> Self {
        GroupStore::default()
    }

    /// Records `group`'s name if this is the first time its id is seen.
    pub fn record(&mut self, group: &Group) {
        self.names.entry(group.id).or_insert_with(|| group.name.clone());
    }

    /// The display name for `group_id`, if one has been recorded.
    pub fn name(&self, group_id: u16) -> Option<&str> {
        self.names.get(&group_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_first_seen_name() {
        let mut store = GroupStore::new();
        store.record(&Group::new(0, "people"));
        store.record(&Group::new(0, "renamed-but-ignored"));
        assert_eq!(store.name(0), Some("people"));
    }

    #[test]
    fn unknown_group_has_no_name() {
        let store = GroupStore::new();
        assert_eq!(store.name(42), None);
    }

    #[test]
    fn groups_max_is_256() {
        assert_eq!(Groups::MAX, 256);
    }
}
