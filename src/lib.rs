//! Dense internal-id assignment for bulk graph import.
//!
//! An [`IdMapper`] ingests very large streams of `(input_id, internal_id,
//! group)` triples via [`IdMapper::put`], then — after a one-shot
//! [`IdMapper::prepare`] — answers `get(input_id, group) -> internal_id`
//! lookups for however many readers want them concurrently. The design
//! target is hundreds of millions to billions of identifiers on one
//! machine, at close to 9 bytes of overhead per node.
//!
//! ```
//! use idmapper::{AsciiPackEncoder, Group, IdMapper, NoopProgress, VecCollector};
//!
//! let mut mapper = IdMapper::new(AsciiPackEncoder);
//! let g0 = Group::new(0, "people");
//! mapper.put(&"alice".to_string(), 0, &g0).unwrap();
//! mapper.put(&"bob".to_string(), 1, &g0).unwrap();
//!
//! let collector: VecCollector<String> = VecCollector::new();
//! mapper.prepare(|_internal_id| String::new(), &collector, &NoopProgress).unwrap();
//!
//! assert_eq!(mapper.get(&"bob".to_string(), &g0), 1);
//! assert_eq!(mapper.get(&"carol".to_string(), &g0), idmapper::NOT_FOUND);
//! ```

pub mod arrays;
pub mod bits;
pub mod collision_store;
pub mod config;
pub mod encoder;
pub mod error;
pub mod group;
pub mod mapper;
pub mod progress;
pub mod radix;
pub mod sort;
mod util;
pub mod worker_pool;

pub use arrays::{GroupArray, LongArray, MemoryTotals, MemoryVisitor, Tracker};
pub use config::{CHUNK_SIZE, GAP, GROUPS_MAX, NOT_FOUND};
pub use encoder::{AsciiPackEncoder, Encoder, Xxh64Encoder};
pub use error::MapperError;
pub use group::{Group, GroupStore, Groups};
pub use mapper::IdMapper;
pub use progress::{Collector, NoopCollector, NoopProgress, Progress, RecordingProgress, VecCollector};
pub use radix::{RadixIndex, SortBucketTable};
pub use worker_pool::WorkerPool;
