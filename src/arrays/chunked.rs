//! Generic chunked, growable storage for fixed-width elements.
//!
//! Every dynamic packed array in this crate ([`super::long_array::LongArray`],
//! [`super::byte_array::GroupArray`]) is built on top of `ChunkedArray<T>`:
//! a `Vec` of lazily-allocated chunks, each holding [`CHUNK_SIZE`] elements.
//! A chunk is only allocated the first time one of its slots is written,
//! which keeps memory proportional to the highest internal id actually
//! touched rather than to some worst-case upper bound.

use crate::config::CHUNK_SIZE;

/// Chunked storage of `T`, indexed densely from 0, with a configurable gap
/// (default) value returned for any index that was never written.
pub struct ChunkedArray<T: Copy> {
    chunks: Vec<Option<Box<[T]>>>,
    gap: T,
    len: usize,
}

impl<T: Copy> ChunkedArray<T> {
    /// Creates an array with the given gap (default) value and no chunks
    /// allocated yet.
    pub fn new(gap: T) -> Self {
        ChunkedArray {
            chunks: Vec::new(),
            gap,
            len: 0,
        }
    }

    /// Creates an array pre-sized to hold indices `0..capacity` without
    /// reallocating the chunk directory, but without eagerly allocating the
    /// chunks themselves.
    pub fn with_capacity(gap: T, capacity: usize) -> Self {
        let nb_chunks = capacity.div_ceil(CHUNK_SIZE).max(1);
        ChunkedArray {
            chunks: Vec::with_capacity(nb_chunks),
            gap,
            len: capacity,
        }
    }

    /// Logical size: one past the highest index ever set (or the capacity
    /// passed to [`Self::with_capacity`]).
    pub fn size(&self) -> usize {
        self.len
    }

    /// Reads the element at `index`. Returns the gap value for indices past
    /// the logical size or inside a chunk that was never touched.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        let chunk_id = index / CHUNK_SIZE;
        let offset = index % CHUNK_SIZE;
        match self.chunks.get(chunk_id) {
            Some(Some(chunk)) => chunk[offset],
            _ => self.gap,
        }
    }

    /// Writes `value` at `index`, allocating the backing chunk (filled with
    /// the gap value) on first touch.
    pub fn set(&mut self, index: usize, value: T) {
        let chunk_id = index / CHUNK_SIZE;
        let offset = index % CHUNK_SIZE;
        if chunk_id >= self.chunks.len() {
            self.chunks.resize_with(chunk_id + 1, || None);
        }
        let gap = self.gap;
        let chunk = self.chunks[chunk_id].get_or_insert_with(|| vec![gap; CHUNK_SIZE].into());
        chunk[offset] = value;
        if index + 1 > self.len {
            self.len = index + 1;
        }
    }

    /// Swaps the elements at `a` and `b`, allocating chunks as needed.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let va = self.get(a);
        let vb = self.get(b);
        self.set(a, vb);
        self.set(b, va);
    }

    /// Reports memory usage to a [`super::MemoryVisitor`]: live bytes are the
    /// bytes backing allocated chunks; reserved bytes additionally counts the
    /// chunk directory itself.
    pub fn accept(&self, visitor: &mut dyn super::MemoryVisitor, name: &'static str) {
        let elem_size = std::mem::size_of::<T>();
        let live_chunks = self.chunks.iter().filter(|c| c.is_some()).count();
        let live = live_chunks * CHUNK_SIZE * elem_size;
        let reserved = live + self.chunks.capacity() * std::mem::size_of::<Option<Box<[T]>>>();
        visitor.visit(name, live as u64, reserved as u64);
    }
}
