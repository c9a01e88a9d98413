//! E2E — regression coverage for the radix-zoomed lookup's bucket
//! boundaries (design note: the full-range fallback after a radix miss is a
//! straddle guard and must keep working at every bucket edge).
//!
//! `AsciiPackEncoder` puts the encoded string's byte length (0..=7) into the
//! radix field, so strings of every length from 1 to 7 populate seven
//! distinct, densely-packed radix buckets with no gaps between them — the
//! exact layout the fallback search exists to protect.

use idmapper::{AsciiPackEncoder, Group, IdMapper, NoopCollector, NoopProgress, NOT_FOUND};

/// Builds `count` distinct strings of exactly `len` bytes, ordered so their
/// encoded payloads are spread across the bucket (not just ascending).
fn strings_of_length(len: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut s = vec![0u8; len];
            for (j, b) in s.iter_mut().enumerate() {
                *b = b'a' + ((i * 7 + j * 3) % 26) as u8;
            }
            String::from_utf8(s).unwrap()
        })
        .collect()
}

#[test]
fn first_and_last_entry_of_every_length_bucket_resolve_correctly() {
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");

    let mut all: Vec<String> = Vec::new();
    for len in 1..=7 {
        all.extend(strings_of_length(len, 12));
    }
    all.sort();
    all.dedup();

    for (i, s) in all.iter().enumerate() {
        mapper.put(s, i as u64, &g0).unwrap();
    }
    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    for (i, s) in all.iter().enumerate() {
        assert_eq!(mapper.get(s, &g0), i as i64, "lookup failed for {s:?}");
    }
    assert_eq!(mapper.get(&"not-present-key".to_string(), &g0), NOT_FOUND);
}

#[test]
fn empty_radix_buckets_between_populated_lengths_do_not_break_lookup() {
    // Only lengths 2 and 6 are populated; 0,1,3,4,5,7 are empty buckets the
    // zoom table must skip over cleanly.
    let mut mapper = IdMapper::new(AsciiPackEncoder);
    let g0 = Group::new(0, "g0");

    let mut all: Vec<String> = Vec::new();
    all.extend(strings_of_length(2, 20));
    all.extend(strings_of_length(6, 20));
    all.sort();
    all.dedup();

    for (i, s) in all.iter().enumerate() {
        mapper.put(s, i as u64, &g0).unwrap();
    }
    mapper
        .prepare(|_| String::new(), &NoopCollector, &NoopProgress)
        .unwrap();

    for (i, s) in all.iter().enumerate() {
        assert_eq!(mapper.get(s, &g0), i as i64);
    }
}
