//! Sampling helpers layered on top of the engines
//!
//! The engines emit raw unsigned words; everything here is stateless
//! adaptation of those words. The raw-to-`[0, 1)` mapping is the seam that
//! external distribution samplers plug into.
//!
//! # Key Principles
//!
//! 1. **Determinism**: These helpers add no entropy; a sampler driven by a
//!    seeded engine is as reproducible as the engine itself
//! 2. **Pure scaling**: Conversion functions are pure functions of a single
//!    word; they never advance or inspect engine state

mod normal;

pub use normal::{standard_normal, DistributionError, Normal};

use crate::engine::{TinyMt32, TinyMt64};

/// Scale a raw 32-bit word into `[0.0, 1.0)` by dividing by 2^32.
///
/// # Example
/// ```
/// use tinymt_core_rs::unit_from_u32;
///
/// assert_eq!(unit_from_u32(0), 0.0);
/// assert!(unit_from_u32(u32::MAX) < 1.0);
/// ```
pub fn unit_from_u32(word: u32) -> f64 {
    f64::from(word) * (1.0 / 4_294_967_296.0)
}

/// Scale a raw 64-bit word into `[0.0, 1.0)`.
///
/// Keeps the top 53 bits so the result is an exact multiple of 2^-53, the
/// full precision an `f64` mantissa can hold.
///
/// # Example
/// ```
/// use tinymt_core_rs::unit_from_u64;
///
/// assert_eq!(unit_from_u64(0), 0.0);
/// assert!(unit_from_u64(u64::MAX) < 1.0);
/// ```
pub fn unit_from_u64(word: u64) -> f64 {
    (word >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
}

/// A deterministic source of uniform draws in `[0.0, 1.0)`.
///
/// Implemented by both engines with the width-appropriate scaling; samplers
/// should be generic over this trait rather than over a concrete engine.
///
/// # Example
/// ```
/// use tinymt_core_rs::{TinyMt64, UnitSource};
///
/// let mut prng = TinyMt64::new(42);
/// let u = prng.next_unit();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait UnitSource {
    /// Draw the next uniform value in `[0.0, 1.0)`, consuming one word of
    /// the underlying stream.
    fn next_unit(&mut self) -> f64;
}

impl UnitSource for TinyMt32 {
    fn next_unit(&mut self) -> f64 {
        unit_from_u32(self.generate())
    }
}

impl UnitSource for TinyMt64 {
    fn next_unit(&mut self) -> f64 {
        unit_from_u64(self.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_u32_bounds() {
        assert_eq!(unit_from_u32(0), 0.0);
        assert_eq!(unit_from_u32(1 << 31), 0.5);
        assert!(unit_from_u32(u32::MAX) < 1.0);
    }

    #[test]
    fn test_unit_from_u64_bounds() {
        assert_eq!(unit_from_u64(0), 0.0);
        assert_eq!(unit_from_u64(1 << 63), 0.5);
        assert!(unit_from_u64(u64::MAX) < 1.0);
    }

    #[test]
    fn test_next_unit_deterministic() {
        let mut a = TinyMt32::new(99999);
        let mut b = TinyMt32::new(99999);

        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit(), "next_unit() not deterministic");
        }
    }

    #[test]
    fn test_next_unit_in_range() {
        let mut prng32 = TinyMt32::new(12345);
        let mut prng64 = TinyMt64::new(12345);

        for _ in 0..1000 {
            let u32_draw = prng32.next_unit();
            let u64_draw = prng64.next_unit();
            assert!(
                (0.0..1.0).contains(&u32_draw),
                "32-bit draw {} outside [0.0, 1.0)",
                u32_draw
            );
            assert!(
                (0.0..1.0).contains(&u64_draw),
                "64-bit draw {} outside [0.0, 1.0)",
                u64_draw
            );
        }
    }
}
