//! # cat-math
//!
//! Seedable pseudo-random generation and incremental statistics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Mersenne-Twister generator usable with `rand_distr` samplers.
pub mod random_numbers;

/// Incremental statistics accumulator.
pub mod statistics;

pub use random_numbers::{entropy_seed, MersenneTwisterUniformRng};
pub use statistics::Statistics;
