//! Group cache — the byte-granular sibling of [`super::long_array::LongArray`].
//!
//! A dynamic byte array storing the 16-bit group id at each internal id:
//! two bytes per slot rather than `LongArray`'s eight, since a group id never
//! needs more than 16 bits (`Groups::MAX` is 256, but the id space is
//! declared 16-bit at the wire level).

use super::chunked::ChunkedArray;
use super::MemoryVisitor;

/// Sentinel meaning "no group recorded at this internal id".
pub const NO_GROUP: u16 = u16::MAX;

/// Dense array of 16-bit group ids indexed by internal id.
pub struct GroupArray {
    inner: ChunkedArray<u16>,
}

impl GroupArray {
    pub fn new() -> Self {
        GroupArray {
            inner: ChunkedArray::new(NO_GROUP),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> u16 {
        self.inner.get(index)
    }

    #[inline]
    pub fn set(&mut self, index: usize, group_id: u16) {
        self.inner.set(index, group_id);
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn accept(&self, visitor: &mut dyn MemoryVisitor) {
        self.inner.accept(visitor, "group_cache");
    }
}

impl Default for GroupArray {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_group() {
        let a = GroupArray::new();
        assert_eq!(a.get(0), NO_GROUP);
    }

    #[test]
    fn stores_group_ids() {
        let mut a = GroupArray::new();
        a.set(5, 3);
        assert_eq!(a.get(5), 3);
    }
}
