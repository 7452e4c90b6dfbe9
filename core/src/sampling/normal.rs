//! Normal distribution sampling via the Box-Muller transform
//!
//! The engine only guarantees uniform words; anything Gaussian is built on
//! top of the `UnitSource` seam. This mirrors how the payment-arrival code
//! this crate grew out of consumed its RNG: sample two uniforms, transform,
//! scale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UnitSource;

/// Errors that can occur when configuring a distribution
#[derive(Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("Standard deviation must be finite and non-negative, got {std_dev}")]
    InvalidStdDev { std_dev: f64 },

    #[error("Mean must be finite, got {mean}")]
    InvalidMean { mean: f64 },
}

/// Sample from the standard normal distribution using the Box-Muller
/// transform.
///
/// Consumes exactly two uniform draws per sample.
///
/// # Example
/// ```
/// use tinymt_core_rs::{standard_normal, TinyMt32};
///
/// let mut prng = TinyMt32::new(42);
/// let z = standard_normal(&mut prng);
/// assert!(z.is_finite());
/// ```
pub fn standard_normal<R: UnitSource>(rng: &mut R) -> f64 {
    let u1 = rng.next_unit();
    let u2 = rng.next_unit();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// A normal distribution with configurable mean and standard deviation.
///
/// # Example
/// ```
/// use tinymt_core_rs::{Normal, TinyMt64};
///
/// let dist = Normal::new(100.0, 15.0).unwrap();
/// let mut prng = TinyMt64::new(42);
/// let sample = dist.sample(&mut prng);
/// assert!(sample.is_finite());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Normal {
    /// Location parameter
    mean: f64,
    /// Scale parameter (non-negative)
    std_dev: f64,
}

impl Normal {
    /// Create a normal distribution.
    ///
    /// # Arguments
    /// * `mean` - Location parameter; must be finite
    /// * `std_dev` - Scale parameter; must be finite and non-negative
    ///
    /// # Example
    /// ```
    /// use tinymt_core_rs::{DistributionError, Normal};
    ///
    /// let dist = Normal::new(0.0, 1.0).unwrap();
    /// let err = Normal::new(0.0, -1.0).unwrap_err();
    /// assert_eq!(err, DistributionError::InvalidStdDev { std_dev: -1.0 });
    /// ```
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() {
            return Err(DistributionError::InvalidMean { mean });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(DistributionError::InvalidStdDev { std_dev });
        }
        Ok(Self { mean, std_dev })
    }

    /// Draw one sample, consuming two uniform draws from `rng`.
    pub fn sample<R: UnitSource>(&self, rng: &mut R) -> f64 {
        self.mean + self.std_dev * standard_normal(rng)
    }

    /// Location parameter.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale parameter.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}
