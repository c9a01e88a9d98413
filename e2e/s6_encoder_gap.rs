//! E2E S6 — an encoder that returns the reserved GAP value (0) is rejected
//! at `put` time with a fatal, descriptive error.

use idmapper::{Group, IdMapper, MapperError};

#[test]
fn encoder_returning_gap_is_rejected_at_put() {
    let mut mapper = IdMapper::new(|_: &[u8]| 0u64);
    let g0 = Group::new(0, "g0");

    let err = mapper.put(&"anything".to_string(), 0, &g0).unwrap_err();
    assert_eq!(err, MapperError::EncoderProducedGap { internal_id: 0 });
    assert!(err.to_string().contains('0'));
}

#[test]
fn encoder_returning_gap_only_for_one_input_still_fails_on_that_input() {
    // Encodes everything except "bad" to a distinct non-zero value.
    let encode = |input: &[u8]| if input == b"bad" { 0 } else { input.len() as u64 + 1 };
    let mut mapper = IdMapper::new(encode);
    let g0 = Group::new(0, "g0");

    mapper.put(&"good".to_string(), 0, &g0).unwrap();
    let err = mapper.put(&"bad".to_string(), 1, &g0).unwrap_err();
    assert_eq!(err, MapperError::EncoderProducedGap { internal_id: 1 });
}
