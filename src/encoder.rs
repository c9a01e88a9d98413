//! Encoder — the pluggable contract from an input identifier to an eId.
//!
//! The mapper itself never interprets an input identifier's domain; it only
//! calls `encode` and works with the resulting 64-bit word. This module also
//! ships two example encoders used by the crate's own tests and docs —
//! neither is meant to be authoritative for real callers, who are expected
//! to supply an encoder suited to their own identifier domain.

use crate::bits::{clear_mark, BitField};

/// Deterministic function from an input identifier's byte representation to
/// a non-zero 64-bit word ("eId"). Implementations must never return 0 (the
/// reserved `GAP` value) and must never set bit 56 (the collision mark,
/// reserved for the mapper itself).
pub trait Encoder {
    fn encode(&self, input: &[u8]) -> u64;
}

/// Blanket impl so a bare closure can be used as an encoder in tests.
impl<F: Fn(&[u8]) -> u64> Encoder for F {
    fn encode(&self, input: &[u8]) -> u64 {
        self(input)
    }
}

/// Example encoder: packs up to the first 7 bytes of the input into the low
/// 56 bits, and the number of bytes packed into the 7-bit field above the
/// collision mark (bits 57..=63).
///
/// Inputs longer than 7 bytes are truncated to their first 7 bytes, so two
/// distinct inputs sharing the same 7-byte prefix produce the same eId — an
/// accidental collision, which the mapper's collision-detection and
/// side-store machinery exists to resolve.
///
/// The empty input is not supported (it would encode to the reserved `GAP`
/// value); callers feeding this encoder are expected to exclude it.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiPackEncoder;

const LENGTH_FIELD: BitField = BitField::new(57, 7);

impl Encoder for AsciiPackEncoder {
    fn encode(&self, input: &[u8]) -> u64 {
        let n = input.len().min(7);
        let mut payload = 0u64;
        for (i, &b) in input[..n].iter().enumerate() {
            payload |= (b as u64) << (i * 8);
        }
        LENGTH_FIELD.set(payload, n as u64)
    }
}

/// Example encoder for arbitrary byte strings: a 64-bit xxHash, with the
/// collision mark forced clear and 0 remapped to 1 so the `Encoder`
/// contract's two invariants hold unconditionally.
#[derive(Debug, Clone, Copy)]
pub struct Xxh64Encoder {
    seed: u64,
}

impl Xxh64Encoder {
    pub fn new(seed: u64) -> Self {
        Xxh64Encoder { seed }
    }
}

impl Default for Xxh64Encoder {
    fn default() -> Self {
        Xxh64Encoder::new(0)
    }
}

impl Encoder for Xxh64Encoder {
    fn encode(&self, input: &[u8]) -> u64 {
        let h = clear_mark(xxhash_rust::xxh64::xxh64(input, self.seed));
        if h == 0 {
            1
        } else {
            h
        }
    }
}
