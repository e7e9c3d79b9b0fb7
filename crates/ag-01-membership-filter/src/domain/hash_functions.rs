//! Hash functions for the membership filter
//!
//! Uses MurmurHash3 (x64, 128-bit) with two seeds and derives the k
//! positions by double hashing.

use std::io::Cursor;

/// Hash an element with MurmurHash3 using a seed
pub fn murmur_hash(element: &[u8], seed: u32) -> u64 {
    let mut cursor = Cursor::new(element);

    // Reading from an in-memory cursor cannot fail
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
    hash as u64
}

/// Compute k bit positions for an element
///
/// Double hashing: h(i) = h1 + i * h2 (mod m). The second hash is forced odd
/// so consecutive probes never collapse onto one position when m is even.
pub fn compute_hash_positions(element: &[u8], k: usize, m: usize) -> Vec<usize> {
    let h1 = murmur_hash(element, 0);
    let h2 = murmur_hash(element, 1) | 1;

    (0..k)
        .map(|i| {
            let hash = h1.wrapping_add((i as u64).wrapping_mul(h2));
            (hash % m as u64) as usize
        })
        .collect()
}
