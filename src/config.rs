//! Compile-time configuration constants shared across the mapper.
//!
//! No environment-variable or CLI override layer exists here: unlike a CLI
//! tool's user-tunable knobs, these constants describe the on-disk/in-memory
//! layout contract (collision mark bit position, gap sentinel, chunk size)
//! that callers of the library rely on implicitly. Changing them is a
//! breaking change to the crate, not a runtime option.

/// Number of entries per chunk in a dynamic packed array.
pub const CHUNK_SIZE: usize = 1_000_000;

/// Bit offset of the collision mark within an encoded id (eId).
pub const COLLISION_MARK_OFFSET: u32 = 56;

/// Width in bits of the collision mark field.
pub const COLLISION_MARK_WIDTH: u32 = 1;

/// Reserved eId value meaning "no node at this internal id".
pub const GAP: u64 = 0;

/// Sentinel returned by `get` when no matching internal id exists.
pub const NOT_FOUND: i64 = -1;

/// Below this many tracker entries per worker, a range collapses to
/// single-threaded execution rather than being scattered across workers.
pub const MIN_PARALLEL_STRIDE: usize = 10;

/// A sort bucket above this many tracker entries is split recursively
/// instead of being quicksorted as one unit.
pub const RECURSIVE_SPLIT_THRESHOLD: usize = 4096;

/// Ranges at or below this length use insertion sort instead of quicksort.
pub const INSERTION_SORT_CUTOFF: usize = 16;

/// Fixed upper bound on the number of distinct groups (`Group::id` range).
pub const GROUPS_MAX: u32 = 256;

/// Largest internal id representable by the 32-bit tracker variant.
pub const TRACKER32_MAX_INTERNAL_ID: u64 = u32::MAX as u64;
