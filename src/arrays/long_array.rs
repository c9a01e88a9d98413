//! 64-bit dynamic packed array — backs the mapper's data cache (eId storage).

use super::chunked::ChunkedArray;
use super::MemoryVisitor;
use crate::config::GAP;

/// Dense array of 64-bit values indexed by internal id; unset slots read as
/// [`GAP`].
pub struct LongArray {
    inner: ChunkedArray<u64>,
}

impl LongArray {
    pub fn new() -> Self {
        LongArray {
            inner: ChunkedArray::new(GAP),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LongArray {
            inner: ChunkedArray::with_capacity(GAP, capacity),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        self.inner.get(index)
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: u64) {
        self.inner.set(index, value);
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.inner.swap(a, b);
    }

    pub fn accept(&self, visitor: &mut dyn MemoryVisitor) {
        self.inner.accept(visitor, "data_cache");
    }
}

impl Default for LongArray {
    fn default() -> Self {
        Self::new()
    }
}
