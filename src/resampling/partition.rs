use rand::Rng;
use rand::seq::index;

use crate::error::ResampleError;
use crate::model::Group;

/// Random split of `0..n_obs_a + n_obs_b` into two disjoint index sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub group_a: Vec<usize>,
    pub group_b: Vec<usize>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.group_a.len() + self.group_b.len()
    }

    pub fn indices(&self, group: Group) -> &[usize] {
        match group {
            Group::A => &self.group_a,
            Group::B => &self.group_b,
        }
    }
}

/// Samples group A uniformly without replacement; group B is the complement in ascending order.
pub fn partition_indices<R: Rng + ?Sized>(
    rng: &mut R,
    n_obs_a: usize,
    n_obs_b: usize,
) -> Result<Partition, ResampleError> {
    if n_obs_a == 0 {
        return Err(ResampleError::EmptyGroup(Group::A));
    }
    if n_obs_b == 0 {
        return Err(ResampleError::EmptyGroup(Group::B));
    }

    let total = n_obs_a + n_obs_b;
    let group_a = index::sample(rng, total, n_obs_a).into_vec();

    let mut in_a = vec![false; total];
    for &position in &group_a {
        in_a[position] = true;
    }
    let group_b = (0..total)
        .filter(|position| !in_a[*position])
        .collect::<Vec<usize>>();

    Ok(Partition { group_a, group_b })
}

pub(super) fn check_pooled_len(
    len: usize,
    n_obs_a: usize,
    n_obs_b: usize,
) -> Result<(), ResampleError> {
    if n_obs_a.checked_add(n_obs_b) != Some(len) {
        return Err(ResampleError::SizeMismatch {
            n_obs_a,
            n_obs_b,
            len,
        });
    }
    Ok(())
}
