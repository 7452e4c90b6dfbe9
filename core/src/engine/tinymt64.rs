//! TinyMT 64-bit generator
//!
//! 127-bit state held in two 64-bit words, with the fixed parameter set
//! (multiplier1 = 0xfa051f40, multiplier2 = 0xffd0fff4,
//! tempering = 0x58d02ffeffbfffbc) baked in.
//!
//! The reference algorithm reserves a four-word state vector for this width
//! but never touches the last two words; the state here is modeled as the
//! two live words only.
//!
//! # Seeding
//!
//! Seeding folds the parameters into the two state words, runs the mixing
//! loop over them, and stops there. Unlike the 32-bit variant there are NO
//! discarded warm-up advances: the first `generate()` call performs the
//! first real state advance. Known-vector tests pin this asymmetry.

use serde::{Deserialize, Serialize};

use super::PrngEngine;

/// Number of live words in the internal state vector.
const STATE_WORDS: usize = 2;

/// Seed used by `Default` construction.
const DEFAULT_SEED: u64 = 1;

/// mat1 parameter.
const MULTIPLIER1: u64 = 0xfa05_1f40;

/// mat2 parameter.
const MULTIPLIER2: u64 = 0xffd0_fff4;

/// tmat tempering parameter.
const TEMPERING: u64 = 0x58d0_2ffe_ffbf_ffbc;

/// Multiplier of the seed-mixing loop.
const SEED_MIX_FACTOR: u64 = 6_364_136_223_846_793_005;

/// Exclusive upper bound of the seed-mixing loop counter.
const SEED_MIX_ROUNDS: u64 = 8;

/// Clears the top bit of word 0 in the advance recurrence.
const STATE_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// Left shift applied first while mixing `x` in the advance recurrence.
const SH0: u64 = 12;

/// Left shift applied last while mixing `x` in the advance recurrence.
const SH1: u64 = 11;

/// Right shift applied to word 0 during output extraction.
const SH8: u64 = 8;

/// TinyMT generator producing 64-bit words.
///
/// An instance owns one independent stream. It is plain data: cheap to
/// clone, `Send`, and safe to drive from any single thread. It is not
/// internally synchronized and must not be shared mutably across threads.
///
/// # Example
/// ```
/// use tinymt_core_rs::TinyMt64;
///
/// let mut prng = TinyMt64::new(1);
/// assert_eq!(prng.generate(), 15503804787016557143);
/// assert_eq!(prng.initial_seed(), 1);
///
/// prng.reset();
/// assert_eq!(prng.generate(), 15503804787016557143); // sequence starts over
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinyMt64 {
    /// Seed supplied at construction; immutable afterwards
    initial_seed: u64,
    /// Internal state vector (two live words)
    state: [u64; STATE_WORDS],
    /// mat1 parameter
    multiplier1: u64,
    /// mat2 parameter
    multiplier2: u64,
    /// tmat tempering parameter
    tempering: u64,
}

impl TinyMt64 {
    /// Create a generator seeded with `seed`.
    ///
    /// Construction runs the full seeding procedure, so the first
    /// `generate()` call returns a well-defined value.
    ///
    /// # Example
    /// ```
    /// use tinymt_core_rs::TinyMt64;
    ///
    /// let prng = TinyMt64::new(12345);
    /// assert_eq!(prng.initial_seed(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            initial_seed: seed,
            state: [0; STATE_WORDS],
            multiplier1: MULTIPLIER1,
            multiplier2: MULTIPLIER2,
            tempering: TEMPERING,
        };
        engine.reset();
        engine
    }

    /// Re-seed deterministically from the stored seed.
    pub fn reset(&mut self) {
        self.multiplier1 = MULTIPLIER1;
        self.multiplier2 = MULTIPLIER2;
        self.tempering = TEMPERING;

        // Fold the parameters into the state words, then plant the seed.
        self.state[0] = self.initial_seed ^ (self.multiplier1 << 32);
        self.state[1] = self.multiplier2 ^ self.tempering;

        // Mix the seed through both words. Indexing wraps on the low bit
        // of the counter.
        for i in 1..SEED_MIX_ROUNDS {
            let prev = self.state[((i - 1) & 1) as usize];
            let mixed = i.wrapping_add(SEED_MIX_FACTOR.wrapping_mul(prev ^ (prev >> 62)));
            self.state[(i & 1) as usize] ^= mixed;
        }

        // No warm-up advances for this width; the first generate() performs
        // the first real advance.
    }

    /// Generate the next 64-bit word.
    ///
    /// # Example
    /// ```
    /// use tinymt_core_rs::TinyMt64;
    ///
    /// let mut prng = TinyMt64::new(1);
    /// let first = prng.generate();
    /// let second = prng.generate();
    /// assert_ne!(first, second);
    /// ```
    pub fn generate(&mut self) -> u64 {
        self.next_state();
        self.extract()
    }

    /// Get the seed supplied at construction.
    pub fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    /// Advance the state in place by one step.
    fn next_state(&mut self) {
        self.state[0] &= STATE_MASK;
        let mut x = self.state[0] ^ self.state[1];
        x ^= x << SH0;
        x ^= x >> 32;
        x ^= x << 32;
        x ^= x << SH1;
        self.state[0] = self.state[1];
        self.state[1] = x;
        if x & 1 != 0 {
            self.state[0] ^= self.multiplier1;
            self.state[1] ^= self.multiplier2 << 32;
        }
    }

    /// Temper the current state into an output word. Does not advance state.
    fn extract(&self) -> u64 {
        let mut out = self.state[0].wrapping_add(self.state[1]);
        out ^= self.state[0] >> SH8;
        if out & 1 != 0 {
            out ^= self.tempering;
        }
        out
    }
}

impl Default for TinyMt64 {
    /// Construct with the default seed of 1.
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl PrngEngine for TinyMt64 {
    type Word = u64;

    fn generate(&mut self) -> u64 {
        TinyMt64::generate(self)
    }

    fn reset(&mut self) {
        TinyMt64::reset(self)
    }

    fn initial_seed(&self) -> u64 {
        TinyMt64::initial_seed(self)
    }

    fn min_value() -> u64 {
        u64::MIN
    }

    fn max_value() -> u64 {
        u64::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_independent_of_seed() {
        let a = TinyMt64::new(1);
        let b = TinyMt64::new(0xdead_beef_cafe_f00d);

        assert_eq!(a.multiplier1, b.multiplier1);
        assert_eq!(a.multiplier2, b.multiplier2);
        assert_eq!(a.tempering, b.tempering);
    }

    #[test]
    fn test_default_matches_seed_one() {
        let mut default = TinyMt64::default();
        let mut seeded = TinyMt64::new(1);

        for _ in 0..32 {
            assert_eq!(default.generate(), seeded.generate());
        }
    }

    #[test]
    fn test_initial_seed_survives_generation() {
        let mut prng = TinyMt64::new(777);
        for _ in 0..10 {
            prng.generate();
        }
        prng.reset();

        assert_eq!(prng.initial_seed(), 777);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(TinyMt64::min_value(), 0);
        assert_eq!(TinyMt64::max_value(), u64::MAX);
    }
}
