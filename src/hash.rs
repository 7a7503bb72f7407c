//! Structural hash codes.
//!
//! The combine step is boost's `hash_combine`, which is order-sensitive:
//! permuting the words of a number changes its hash.

use crate::Word;

/// The golden ratio constant of `hash_combine`.
const PHI: u64 = 0x9e37_79b9;

/// Hash of a single word.
#[inline]
pub fn value(word: Word) -> u64 {
    word
}

/// Mix `hash` into `seed`.
#[inline]
pub fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(PHI)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}
