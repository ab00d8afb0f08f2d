//! Permutation and bootstrap primitives for comparing two groups of observations.
//!
//! Every function draws from a caller-supplied generator. None of them computes p-values;
//! drivers call the permutation statistics repeatedly to build a null distribution.

mod bootstrap;
mod partition;
mod permutation;
#[cfg(test)]
mod tests;

pub use bootstrap::{bootstrap_confidence_interval_two_means, percentile, resample_with_replacement};
pub use partition::{Partition, partition_indices};
pub use permutation::{mean_diff_permutation, proportion_diff_permutation};
