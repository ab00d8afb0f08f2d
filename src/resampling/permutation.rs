use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use super::partition::{check_pooled_len, partition_indices};
use crate::error::ResampleError;
use crate::model::Group;
use crate::util::mean_at;

/// One draw of the mean-difference statistic under random group relabelling.
pub fn mean_diff_permutation<R: Rng + ?Sized>(
    rng: &mut R,
    values: &[f64],
    n_obs_a: usize,
    n_obs_b: usize,
) -> Result<f64, ResampleError> {
    check_pooled_len(values.len(), n_obs_a, n_obs_b)?;
    let partition = partition_indices(rng, n_obs_a, n_obs_b)?;

    Ok(mean_at(values, &partition.group_a) - mean_at(values, &partition.group_b))
}

/// One draw of the proportion-difference statistic under random group relabelling.
///
/// Group A contributes the share of its most frequent label, group B the share of its
/// second most frequent label.
pub fn proportion_diff_permutation<R, T>(
    rng: &mut R,
    labels: &[T],
    n_obs_a: usize,
    n_obs_b: usize,
) -> Result<f64, ResampleError>
where
    R: Rng + ?Sized,
    T: Eq + Hash,
{
    check_pooled_len(labels.len(), n_obs_a, n_obs_b)?;
    let partition = partition_indices(rng, n_obs_a, n_obs_b)?;

    let proportion_a = ranked_proportion(labels, &partition.group_a, Group::A, 0)?;
    let proportion_b = ranked_proportion(labels, &partition.group_b, Group::B, 1)?;
    Ok(proportion_a - proportion_b)
}

/// Share of the label whose count ranks `rank` (0-based, descending) within `indices`.
fn ranked_proportion<T: Eq + Hash>(
    labels: &[T],
    indices: &[usize],
    group: Group,
    rank: usize,
) -> Result<f64, ResampleError> {
    let mut counts = HashMap::<&T, usize>::new();
    for &index in indices {
        *counts.entry(&labels[index]).or_default() += 1;
    }

    let mut ranked = counts.into_values().collect::<Vec<usize>>();
    ranked.sort_unstable_by(|left, right| right.cmp(left));

    let count = ranked
        .get(rank)
        .copied()
        .ok_or(ResampleError::MissingCategoryRank {
            group,
            rank,
            distinct: ranked.len(),
        })?;
    Ok(count as f64 / indices.len() as f64)
}
