use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::config::BootstrapOptions;
use crate::error::{ErrorKind, ResampleError};
use crate::model::Group;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn partition_covers_every_index_exactly_once() {
    let mut rng = seeded(1);
    for (n_obs_a, n_obs_b) in [(1, 1), (3, 9), (10, 2), (50, 50)] {
        let partition = partition_indices(&mut rng, n_obs_a, n_obs_b).unwrap();
        assert_eq!(partition.group_a.len(), n_obs_a);
        assert_eq!(partition.group_b.len(), n_obs_b);
        assert_eq!(partition.total(), n_obs_a + n_obs_b);

        let a = partition.group_a.iter().copied().collect::<HashSet<usize>>();
        let b = partition.group_b.iter().copied().collect::<HashSet<usize>>();
        assert_eq!(a.len(), n_obs_a);
        assert!(a.is_disjoint(&b));
        let union = a.union(&b).copied().collect::<HashSet<usize>>();
        assert_eq!(union, (0..n_obs_a + n_obs_b).collect::<HashSet<usize>>());
    }
}

#[test]
fn partition_is_reproducible_with_the_same_seed() {
    let first = partition_indices(&mut seeded(99), 6, 4).unwrap();
    let second = partition_indices(&mut seeded(99), 6, 4).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.indices(Group::A), first.group_a.as_slice());
}

#[test]
fn partition_rejects_empty_groups() {
    let mut rng = seeded(2);
    assert_eq!(
        partition_indices(&mut rng, 0, 3),
        Err(ResampleError::EmptyGroup(Group::A))
    );
    assert_eq!(
        partition_indices(&mut rng, 3, 0),
        Err(ResampleError::EmptyGroup(Group::B))
    );
}

#[test]
fn mean_diff_is_bounded_by_the_value_range() {
    let values = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0];
    let mut rng = seeded(3);
    for _ in 0..500 {
        let statistic = mean_diff_permutation(&mut rng, &values, 4, 4).unwrap();
        assert!(statistic.abs() <= 4.0);
    }
}

#[test]
fn mean_diff_averages_to_zero_for_exchangeable_groups() {
    let values = (0..40).map(|value| (value % 7) as f64).collect::<Vec<f64>>();
    let mut rng = seeded(4);
    let draws = 20_000;
    let total = (0..draws)
        .map(|_| mean_diff_permutation(&mut rng, &values, 15, 25).unwrap())
        .sum::<f64>();
    assert!((total / draws as f64).abs() < 0.05);
}

#[test]
fn mean_diff_of_constant_values_is_zero() {
    let values = [2.5; 6];
    let statistic = mean_diff_permutation(&mut seeded(5), &values, 2, 4).unwrap();
    assert_eq!(statistic, 0.0);
}

#[test]
fn mean_diff_rejects_size_mismatch_and_empty_groups() {
    let values = [1.0, 2.0, 3.0];
    let mut rng = seeded(6);

    let err = mean_diff_permutation(&mut rng, &values, 2, 2).unwrap_err();
    assert_eq!(
        err,
        ResampleError::SizeMismatch {
            n_obs_a: 2,
            n_obs_b: 2,
            len: 3
        }
    );
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

    let err = mean_diff_permutation(&mut rng, &values, 0, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateGroup);
}

#[test]
fn proportion_diff_uses_mode_of_a_and_runner_up_of_b() {
    // No label occurs three times, so B always holds two or three labels and its
    // runner-up share is 1/3. A's mode share is 1/3 or 2/3.
    let labels = ["x", "x", "y", "y", "z", "z"];
    let mut rng = seeded(7);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let statistic = proportion_diff_permutation(&mut rng, &labels, 3, 3).unwrap();
        let thirds = (statistic * 3.0).round();
        assert!((statistic - thirds / 3.0).abs() < 1e-12);
        seen.insert(thirds as i64);
    }
    assert_eq!(seen, HashSet::from([0, 1]));
}

#[test]
fn proportion_diff_exact_value_for_fixed_composition() {
    // With a single "rare" label in a pool of "common", a split of 1 vs 4 where B keeps
    // both labels gives 1.0 - 1/4; when A takes the rare label B is single-category.
    let labels = ["common", "common", "common", "common", "rare"];
    let mut rng = seeded(8);
    let mut seen_value = false;
    for _ in 0..100 {
        match proportion_diff_permutation(&mut rng, &labels, 1, 4) {
            Ok(statistic) => {
                assert!((statistic - 0.75).abs() < 1e-12);
                seen_value = true;
            }
            Err(err) => assert_eq!(
                err,
                ResampleError::MissingCategoryRank {
                    group: Group::B,
                    rank: 1,
                    distinct: 1
                }
            ),
        }
    }
    assert!(seen_value);
}

#[test]
fn proportion_diff_fails_when_group_b_has_one_category() {
    let labels = vec!["news".to_string(); 6];
    let err = proportion_diff_permutation(&mut seeded(9), &labels, 3, 3).unwrap_err();
    assert_eq!(
        err,
        ResampleError::MissingCategoryRank {
            group: Group::B,
            rank: 1,
            distinct: 1
        }
    );
    assert_eq!(err.kind(), ErrorKind::DegenerateGroup);
}

#[test]
fn proportion_diff_rejects_size_mismatch() {
    let labels = [1_u8, 2, 3];
    let err = proportion_diff_permutation(&mut seeded(10), &labels, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn resample_keeps_length_and_draws_from_source() {
    let values = [1.0, 2.0, 3.0];
    let mut rng = seeded(11);
    let resample = resample_with_replacement(&mut rng, &values);
    assert_eq!(resample.len(), values.len());
    assert!(resample.iter().all(|value| values.contains(value)));
    assert!(resample_with_replacement(&mut rng, &[]).is_empty());
}

#[test]
fn resample_repeats_indices_over_many_draws() {
    let values = (0..5).map(f64::from).collect::<Vec<f64>>();
    let mut rng = seeded(12);
    let repeated = (0..100).any(|_| {
        let resample = resample_with_replacement(&mut rng, &values);
        let distinct = resample
            .iter()
            .map(|value| value.to_bits())
            .collect::<HashSet<u64>>();
        distinct.len() < values.len()
    });
    assert!(repeated);
}

#[test]
fn percentile_interpolates_linearly() {
    let values = [4.0, 1.0, 3.0, 2.0];
    assert_eq!(percentile(&values, 0.0), Some(1.0));
    assert_eq!(percentile(&values, 100.0), Some(4.0));
    assert_eq!(percentile(&values, 50.0), Some(2.5));
    let p = percentile(&values, 2.5).unwrap();
    assert!((p - 1.075).abs() < 1e-12);
    assert_eq!(percentile(&[7.0], 97.5), Some(7.0));
    assert_eq!(percentile(&[], 50.0), None);
}

#[test]
fn bootstrap_interval_is_zero_width_for_constant_data() {
    let obs = [10.0; 5];
    let interval = bootstrap_confidence_interval_two_means(
        &mut seeded(13),
        &obs,
        &obs,
        BootstrapOptions {
            alpha: 0.05,
            n_bootstrap: 500,
        },
    )
    .unwrap();
    assert_eq!(interval.lower_bound, 0.0);
    assert_eq!(interval.upper_bound, 0.0);
}

#[test]
fn bootstrap_lower_bound_never_exceeds_upper_bound() {
    let obs1 = [3.2, 4.1, 5.0, 2.2, 6.3, 4.4];
    let obs2 = [1.0, 7.5, 2.0];
    let mut rng = seeded(14);
    for alpha in [0.01, 0.05, 0.5, 0.99] {
        for n_bootstrap in [1, 2, 50] {
            let interval = bootstrap_confidence_interval_two_means(
                &mut rng,
                &obs1,
                &obs2,
                BootstrapOptions { alpha, n_bootstrap },
            )
            .unwrap();
            assert!(interval.lower_bound <= interval.upper_bound);
        }
    }
}

#[test]
fn bootstrap_interval_straddles_zero_for_identical_samples() {
    let obs = [2.0, 3.5, 1.0, 4.0, 2.5, 3.0, 5.5, 0.5];
    let mut rng = seeded(15);
    let trials = 50;
    let straddles = (0..trials)
        .filter(|_| {
            bootstrap_confidence_interval_two_means(
                &mut rng,
                &obs,
                &obs,
                BootstrapOptions::default(),
            )
            .unwrap()
            .contains(0.0)
        })
        .count();
    assert!(straddles >= trials - 2);
}

#[test]
fn bootstrap_interval_tracks_a_clear_shift() {
    let obs1 = [10.0, 11.0, 12.0, 10.5, 11.5, 12.5];
    let obs2 = [1.0, 2.0, 3.0, 1.5, 2.5, 3.5];
    let interval =
        bootstrap_confidence_interval_two_means(&mut seeded(16), &obs1, &obs2, BootstrapOptions::default())
            .unwrap();
    assert!(interval.lower_bound > 7.0);
    assert!(interval.upper_bound < 11.0);
    assert!(interval.contains(9.0));
}

#[test]
fn bootstrap_is_reproducible_with_the_same_seed() {
    let obs1 = [1.0, 4.0, 2.0, 8.0];
    let obs2 = [3.0, 3.0, 5.0];
    let options = BootstrapOptions::default();
    let first = bootstrap_confidence_interval_two_means(&mut seeded(17), &obs1, &obs2, options);
    let second = bootstrap_confidence_interval_two_means(&mut seeded(17), &obs1, &obs2, options);
    assert_eq!(first, second);
}

#[test]
fn bootstrap_rejects_invalid_parameters() {
    let obs = [1.0, 2.0];
    let mut rng = seeded(18);
    let run = |rng: &mut StdRng, obs1: &[f64], alpha: f64, n_bootstrap: usize| {
        bootstrap_confidence_interval_two_means(rng, obs1, &obs, BootstrapOptions { alpha, n_bootstrap })
    };

    assert_eq!(run(&mut rng, &obs, 0.0, 10), Err(ResampleError::InvalidAlpha(0.0)));
    assert_eq!(run(&mut rng, &obs, 1.0, 10), Err(ResampleError::InvalidAlpha(1.0)));
    assert!(matches!(
        run(&mut rng, &obs, f64::NAN, 10),
        Err(ResampleError::InvalidAlpha(_))
    ));
    assert_eq!(
        run(&mut rng, &obs, 0.05, 0),
        Err(ResampleError::InvalidResampleCount(0))
    );
    assert_eq!(run(&mut rng, &[], 0.05, 10), Err(ResampleError::EmptySample("obs1")));
    assert_eq!(
        run(&mut rng, &obs, 0.05, 0).unwrap_err().kind(),
        ErrorKind::InvalidParameter
    );
}
