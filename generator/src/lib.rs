//! xoshiro256** Core - Deterministic RNG Engine
//!
//! Fast pseudo-random number generation with reproducible results across
//! runs and across machines of differing byte order.
//!
//! # Architecture
//!
//! - **rng**: generator state, core step, jump, unit-interval scalers,
//!   substream derivation
//! - **checkpoint**: snapshot types for pause/resume of deterministic runs
//!
//! # Critical Invariants
//!
//! 1. All output is deterministic (seeded, byte-order independent)
//! 2. The all-zero state is a fixed point and is never remapped
//! 3. Jump-separated streams never overlap

// Module declarations
pub mod checkpoint;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{RngSnapshot, SnapshotError};
pub use rng::{split_streams, Xoshiro256StarStar};
