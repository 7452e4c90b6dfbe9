//! Deterministic TinyMT random number generation
//!
//! Two generators with a shared contract but entirely separate recurrences:
//! `TinyMt32` produces 32-bit words, `TinyMt64` produces 64-bit words. The
//! widths share no constants and no code paths, only the `PrngEngine`
//! capability, so the choice of width is made at the type level rather than
//! by runtime branching.
//!
//! # Determinism
//!
//! Same seed → same sequence of words. There is no hidden entropy source.
//! This is CRITICAL for:
//! - Debugging (reproduce exact runs)
//! - Testing (pin output against known vectors)
//! - Research (validate results)

mod tinymt32;
mod tinymt64;

pub use tinymt32::TinyMt32;
pub use tinymt64::TinyMt64;

/// Capability shared by both TinyMT word widths.
///
/// This is the "uniform random source" contract that external samplers
/// consume: a way to draw the next word plus the fixed output bounds for the
/// width. Every operation completes in small constant time and none of them
/// can fail.
///
/// # Example
/// ```
/// use tinymt_core_rs::{PrngEngine, TinyMt32, TinyMt64};
///
/// fn first_draw<E: PrngEngine>(engine: &mut E) -> E::Word {
///     engine.generate()
/// }
///
/// let mut prng32 = TinyMt32::default();
/// let mut prng64 = TinyMt64::default();
/// let word32 = first_draw(&mut prng32);
/// let word64 = first_draw(&mut prng64);
/// assert!(word32 >= TinyMt32::min_value());
/// assert!(word64 >= TinyMt64::min_value());
/// ```
pub trait PrngEngine {
    /// The unsigned word type this engine emits (`u32` or `u64`).
    type Word: Copy + PartialOrd;

    /// Advance the state exactly once and return the tempered output word.
    ///
    /// Each call consumes exactly one step of the underlying stream; calls
    /// are not idempotent.
    fn generate(&mut self) -> Self::Word;

    /// Rewind the engine to its freshly-seeded state.
    ///
    /// After `reset()` the engine reproduces the same sequence it produced
    /// immediately after construction with the same seed.
    fn reset(&mut self);

    /// The seed supplied at construction, unaffected by `reset`/`generate`.
    fn initial_seed(&self) -> Self::Word;

    /// The smallest word this engine can return (always zero).
    fn min_value() -> Self::Word;

    /// The largest word this engine can return (the type maximum).
    fn max_value() -> Self::Word;
}
