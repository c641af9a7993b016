//! Substream derivation for parallel workers.
//!
//! Each worker must own its own generator; nothing here is synchronized.
//! Streams are carved out of a single seeded generator by applying the
//! 2^128 jump between consecutive entries, so no two streams can overlap
//! within any realistic number of draws.

use super::xoshiro256::Xoshiro256StarStar;

/// Derive `count` generators with pairwise non-overlapping output streams.
///
/// Element 0 is a clone of `base`; each following element starts one jump
/// (2^128 steps) further along the same underlying sequence. Intended to be
/// called at setup time, before workers start drawing.
///
/// # Example
/// ```
/// use xoshiro256_core_rs::{split_streams, Xoshiro256StarStar};
///
/// let base = Xoshiro256StarStar::new([7u8; 32]);
/// let mut streams = split_streams(&base, 4);
/// assert_eq!(streams.len(), 4);
/// assert_ne!(streams[0].next(), streams[1].next());
/// ```
pub fn split_streams(base: &Xoshiro256StarStar, count: usize) -> Vec<Xoshiro256StarStar> {
    let mut streams = Vec::with_capacity(count);
    let mut current = base.clone();
    for _ in 0..count {
        streams.push(current.clone());
        current.jump();
    }
    streams
}
