//! TinyMT 32-bit generator
//!
//! 127-bit state held in four 32-bit words, with the fixed parameter set
//! (mat1 = 0x8f7011ee, mat2 = 0xfc78ff1f, tmat = 0x3793fdff) baked in.
//!
//! # Seeding
//!
//! Seeding loads the default parameter table, overwrites word 0 with the
//! seed, runs a Knuth-style mixing loop over the four words, and then
//! discards eight state advances before any output is handed out. The
//! discarded advances are part of the reference algorithm: the 64-bit
//! variant deliberately does NOT do them, and known-vector tests pin both
//! behaviors.

use serde::{Deserialize, Serialize};

use super::PrngEngine;

/// Number of live words in the internal state vector.
const STATE_WORDS: usize = 4;

/// Seed used by `Default` construction.
const DEFAULT_SEED: u32 = 1;

/// Default parameter table: seed placeholder, mat1, mat2, tmat.
const DEFAULT_STATE: [u32; STATE_WORDS] = [DEFAULT_SEED, 0x8f70_11ee, 0xfc78_ff1f, 0x3793_fdff];

/// Multiplier of the seed-mixing loop.
const SEED_MIX_FACTOR: u32 = 1_812_433_253;

/// Exclusive upper bound of the seed-mixing loop counter.
const SEED_MIX_ROUNDS: u32 = 8;

/// State advances discarded after seeding, before the first output.
const WARMUP_STEPS: usize = 8;

/// Clears the top bit of word 0 in the advance recurrence.
const STATE_MASK: u32 = 0x7fff_ffff;

/// Left shift applied while mixing `x` in the advance recurrence.
const SH0: u32 = 1;

/// Left shift applied to `y` when rebuilding word 2.
const SH1: u32 = 10;

/// Right shift applied to word 2 during output extraction.
const SH8: u32 = 8;

/// TinyMT generator producing 32-bit words.
///
/// An instance owns one independent stream. It is plain data: cheap to
/// clone, `Send`, and safe to drive from any single thread. It is not
/// internally synchronized and must not be shared mutably across threads.
///
/// # Example
/// ```
/// use tinymt_core_rs::TinyMt32;
///
/// let mut prng = TinyMt32::new(1);
/// assert_eq!(prng.generate(), 2545341989);
/// assert_eq!(prng.initial_seed(), 1);
///
/// prng.reset();
/// assert_eq!(prng.generate(), 2545341989); // sequence starts over
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TinyMt32 {
    /// Seed supplied at construction; immutable afterwards
    initial_seed: u32,
    /// Internal state vector (all four words are live)
    state: [u32; STATE_WORDS],
    /// mat1 parameter
    multiplier1: u32,
    /// mat2 parameter
    multiplier2: u32,
    /// tmat tempering parameter
    tempering: u32,
}

impl TinyMt32 {
    /// Create a generator seeded with `seed`.
    ///
    /// Construction runs the full seeding procedure, so the first
    /// `generate()` call returns a well-defined value.
    ///
    /// # Example
    /// ```
    /// use tinymt_core_rs::TinyMt32;
    ///
    /// let prng = TinyMt32::new(12345);
    /// assert_eq!(prng.initial_seed(), 12345);
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            initial_seed: seed,
            state: DEFAULT_STATE,
            multiplier1: DEFAULT_STATE[1],
            multiplier2: DEFAULT_STATE[2],
            tempering: DEFAULT_STATE[3],
        };
        engine.reset();
        engine
    }

    /// Re-seed deterministically from the stored seed.
    pub fn reset(&mut self) {
        // Reload the default parameter table, then plant the seed.
        self.state = DEFAULT_STATE;
        self.multiplier1 = DEFAULT_STATE[1];
        self.multiplier2 = DEFAULT_STATE[2];
        self.tempering = DEFAULT_STATE[3];
        self.state[0] = self.initial_seed;

        // Mix the seed through all four words. Indexing wraps on the low
        // two bits of the counter.
        for i in 1..SEED_MIX_ROUNDS {
            let prev = self.state[((i - 1) & 3) as usize];
            let mixed = i.wrapping_add(SEED_MIX_FACTOR.wrapping_mul(prev ^ (prev >> 30)));
            self.state[(i & 3) as usize] ^= mixed;
        }

        // Warm up the stream; outputs are discarded. The 64-bit variant
        // skips this step entirely.
        for _ in 0..WARMUP_STEPS {
            self.next_state();
        }
    }

    /// Generate the next 32-bit word.
    ///
    /// # Example
    /// ```
    /// use tinymt_core_rs::TinyMt32;
    ///
    /// let mut prng = TinyMt32::new(1);
    /// let first = prng.generate();
    /// let second = prng.generate();
    /// assert_ne!(first, second);
    /// ```
    pub fn generate(&mut self) -> u32 {
        self.next_state();
        self.extract()
    }

    /// Get the seed supplied at construction.
    pub fn initial_seed(&self) -> u32 {
        self.initial_seed
    }

    /// Advance the state in place by one step.
    fn next_state(&mut self) {
        let mut y = self.state[3];
        let mut x = (self.state[0] & STATE_MASK) ^ self.state[1] ^ self.state[2];
        x ^= x << SH0;
        y ^= (y >> SH0) ^ x;
        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = x ^ (y << SH1);
        self.state[3] = y;
        if y & 1 != 0 {
            self.state[1] ^= self.multiplier1;
            self.state[2] ^= self.multiplier2;
        }
    }

    /// Temper the current state into an output word. Does not advance state.
    fn extract(&self) -> u32 {
        let temp = self.state[0].wrapping_add(self.state[2] >> SH8);
        let mut out = self.state[3] ^ temp;
        if temp & 1 != 0 {
            out ^= self.tempering;
        }
        out
    }
}

impl Default for TinyMt32 {
    /// Construct with the default seed of 1.
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl PrngEngine for TinyMt32 {
    type Word = u32;

    fn generate(&mut self) -> u32 {
        TinyMt32::generate(self)
    }

    fn reset(&mut self) {
        TinyMt32::reset(self)
    }

    fn initial_seed(&self) -> u32 {
        TinyMt32::initial_seed(self)
    }

    fn min_value() -> u32 {
        u32::MIN
    }

    fn max_value() -> u32 {
        u32::MAX
    }
}
