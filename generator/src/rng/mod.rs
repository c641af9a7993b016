//! Deterministic random number generation
//!
//! Uses the xoshiro256** algorithm for fast, deterministic random number
//! generation with byte-order independent seeding.
//! CRITICAL: All randomness in a simulation MUST go through this module.

mod streams;
mod xoshiro256;

pub use streams::split_streams;
pub use xoshiro256::Xoshiro256StarStar;
