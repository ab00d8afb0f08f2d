use rand::Rng;
use tracing::debug;

use crate::config::BootstrapOptions;
use crate::error::ResampleError;
use crate::model::ConfidenceInterval;
use crate::util::mean;

/// Draws `values.len()` observations from `values` with replacement.
pub fn resample_with_replacement<R: Rng + ?Sized>(rng: &mut R, values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    (0..values.len())
        .map(|_| values[rng.gen_range(0..values.len())])
        .collect()
}

/// Percentile `q` in `[0, 100]` with linear interpolation between closest ranks.
///
/// Returns `None` for an empty slice.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|left, right| left.total_cmp(right));

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        return Some(sorted[low]);
    }

    let fraction = rank - low as f64;
    Some(sorted[low] + (sorted[high] - sorted[low]) * fraction)
}

/// Percentile interval for `mean(obs1) - mean(obs2)` from independent bootstrap resamples.
pub fn bootstrap_confidence_interval_two_means<R: Rng + ?Sized>(
    rng: &mut R,
    obs1: &[f64],
    obs2: &[f64],
    options: BootstrapOptions,
) -> Result<ConfidenceInterval, ResampleError> {
    let BootstrapOptions { alpha, n_bootstrap } = options;

    if obs1.is_empty() {
        return Err(ResampleError::EmptySample("obs1"));
    }
    if obs2.is_empty() {
        return Err(ResampleError::EmptySample("obs2"));
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ResampleError::InvalidAlpha(alpha));
    }
    if n_bootstrap == 0 {
        return Err(ResampleError::InvalidResampleCount(n_bootstrap));
    }

    let mut means_diff = Vec::<f64>::with_capacity(n_bootstrap);
    for _ in 0..n_bootstrap {
        let sample1 = resample_with_replacement(rng, obs1);
        let sample2 = resample_with_replacement(rng, obs2);
        means_diff.push(mean(&sample1) - mean(&sample2));
    }

    let lower_q = 100.0 * alpha / 2.0;
    let upper_q = 100.0 * (1.0 - alpha / 2.0);
    let (Some(lower_bound), Some(upper_bound)) =
        (percentile(&means_diff, lower_q), percentile(&means_diff, upper_q))
    else {
        return Err(ResampleError::InvalidResampleCount(n_bootstrap));
    };

    debug!(
        n_obs1 = obs1.len(),
        n_obs2 = obs2.len(),
        alpha,
        n_bootstrap,
        lower_bound,
        upper_bound,
        "bootstrap interval computed"
    );

    Ok(ConfidenceInterval {
        lower_bound,
        upper_bound,
    })
}
