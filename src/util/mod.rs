//! Cross-cutting utility functions shared by the sort and worker-pool layers.
//!
//! Submodule:
//! - [`cores`] — logical CPU core counting via `num_cpus`

pub mod cores;

pub use cores::count_cores;
