//! TinyMT PRNG Core - Rust Engine
//!
//! Deterministic pseudo-random number generation using the TinyMT recurrence,
//! a compact member of the Mersenne Twister family, for two word widths.
//!
//! # Architecture
//!
//! - **engine**: The TinyMT generators (`TinyMt32`, `TinyMt64`) and the
//!   `PrngEngine` capability they share
//! - **sampling**: Unit-interval conversion and distribution helpers layered
//!   on top of the engines
//!
//! # Critical Invariants
//!
//! 1. Same seed + same width → same output sequence, always
//! 2. The internal state is never exposed through the API; it advances only
//!    through `generate()` and `reset()`
//! 3. TinyMT is NOT cryptographically secure and must not be used where an
//!    unpredictable generator is required

// Module declarations
pub mod engine;
pub mod sampling;

// Re-exports for convenience
pub use engine::{PrngEngine, TinyMt32, TinyMt64};
pub use sampling::{
    standard_normal, unit_from_u32, unit_from_u64, DistributionError, Normal, UnitSource,
};
