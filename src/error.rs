//! Error type for the id-mapper's bulk operations, matching the crate's own
//! hand-rolled `Display`/`Error` style rather than pulling in a derive macro.

use std::fmt;

/// Errors `IdMapper::prepare` and `IdMapper::get` can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// An encoder produced the reserved `GAP` value (0) for a real input.
    EncoderProducedGap { internal_id: u64 },
    /// The tracker's sort invariant does not hold at the given slot — the
    /// entry to its left sorts after the entry to its right.
    UnsortedTracker {
        at: usize,
        left_eid: u64,
        right_eid: u64,
    },
    /// The total collision count overflowed a 32-bit signed integer.
    TooManyCollisions { count: usize },
    /// `prepare` was called on a mapper that is not in the `Open` state.
    NotOpen,
    /// A lookup or insert was attempted after `close`.
    Closed,
    /// `prepare` was cancelled mid-flight. The mapper is poisoned; only
    /// `close` is legal afterward.
    Interrupted,
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::EncoderProducedGap { internal_id } => write!(
                f,
                "encoder produced the reserved gap value (0) for internal id {internal_id}"
            ),
            MapperError::UnsortedTracker {
                at,
                left_eid,
                right_eid,
            } => write!(
                f,
                "tracker not sorted at slot {at}: {left_eid} appears before {right_eid}"
            ),
            MapperError::TooManyCollisions { count } => {
                write!(f, "too many collisions in one run: {count}")
            }
            MapperError::NotOpen => write!(f, "mapper is not open (already prepared or closed)"),
            MapperError::Closed => write!(f, "mapper is closed"),
            MapperError::Interrupted => write!(f, "prepare was interrupted; mapper is poisoned"),
        }
    }
}

impl std::error::Error for MapperError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let e = MapperError::EncoderProducedGap { internal_id: 7 };
        assert!(e.to_string().contains('7'));

        let e = MapperError::UnsortedTracker {
            at: 3,
            left_eid: 9,
            right_eid: 2,
        };
        let s = e.to_string();
        assert!(s.contains('9') && s.contains('2'));
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&MapperError::Closed);
    }
}
