/// Returns the number of logical CPU cores available on the system.
///
/// Guaranteed to return a value ≥ 1.
pub fn count_cores() -> usize {
    num_cpus::get().max(1)
}
