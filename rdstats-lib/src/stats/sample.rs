//! Basic descriptive statistics over a sample of durations.
//!
//! Every function returns `f64::NAN` when the statistic is undefined for the given
//! sample, leaving the caller to decide what an undefined value means.

#[expect(clippy::cast_precision_loss, reason = "Sample sizes and durations are far below 2^52")]
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    sum as f64 / values.len() as f64
}

/// Standard deviation with divisor N.
#[expect(clippy::cast_precision_loss, reason = "Sample sizes are far below 2^52")]
pub fn population_stdev(values: &[u32]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    (sum_of_squared_deviations(values) / values.len() as f64).sqrt()
}

/// Standard deviation with divisor N - 1.
#[expect(clippy::cast_precision_loss, reason = "Sample sizes are far below 2^52")]
pub fn sample_stdev(values: &[u32]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    (sum_of_squared_deviations(values) / (values.len() - 1) as f64).sqrt()
}

fn sum_of_squared_deviations(values: &[u32]) -> f64 {
    let mu = mean(values);
    values
        .iter()
        .map(|&v| {
            let d = f64::from(v) - mu;
            d * d
        })
        .sum()
}

/// Percentile `p` (0..=100) of an ascending sample, interpolating linearly between
/// the two closest ranks.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Rank positions are non-negative and bounded by the sample length"
)]
pub fn percentile(sorted: &[u32], p: f64) -> f64 {
    let Some(&last) = sorted.last() else {
        return f64::NAN;
    };

    let position = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower_rank = position.floor() as usize;
    let upper_rank = position.ceil() as usize;

    let lower = sorted.get(lower_rank).map_or(f64::from(last), |&v| f64::from(v));
    let upper = sorted.get(upper_rank).map_or(f64::from(last), |&v| f64::from(v));

    lower + (upper - lower) * (position - position.floor())
}

/// Round half to even, then convert to whole seconds. NaN and negative values become 0.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Value is rounded and clamped to the u32 range first"
)]
pub fn round_to_seconds(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }

    value.round_ties_even().clamp(0.0, f64::from(u32::MAX)) as u32
}
