use super::ExclusionConfig;
use super::sample::{percentile, sample_stdev};

/// Largest meaningful duration, one second short of a day.
pub const MAX_DURATION: u32 = 86_399;

/// Interquartile-range multiple used for trimming, independent of the configured bound multiples.
const IQR_MULTIPLE: f64 = 1.5;

/// A sample with its extreme values removed.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedSample {
    /// Remaining values in ascending order
    pub values: Vec<u32>,
    pub lower_limit: f64,
    pub upper_limit: f64,
}

/// Whether a sample is large and varied enough for trimming to be meaningful.
///
/// A sample whose standard deviation is undefined is never trimmed.
pub fn should_trim(sample: &[u32], config: &ExclusionConfig) -> bool {
    if sample.len() <= config.minimum_population_for_outliers {
        return false;
    }

    // NaN compares false, so an undefined stdev skips trimming
    sample_stdev(sample) >= f64::from(config.smallest_stdev)
}

/// Remove values lying on or beyond the interquartile fences.
///
/// When trimming is skipped the whole sample is returned with the limits `(0, MAX_DURATION)`.
pub fn filter(sample: &[u32], config: &ExclusionConfig) -> TrimmedSample {
    let mut sorted = sample.to_vec();
    sorted.sort_unstable();

    if !should_trim(&sorted, config) {
        return TrimmedSample {
            values: sorted,
            lower_limit: 0.0,
            upper_limit: f64::from(MAX_DURATION),
        };
    }

    let q25 = percentile(&sorted, 25.0);
    let q75 = percentile(&sorted, 75.0);
    let iqr = q75 - q25;
    let lower_limit = q25 - IQR_MULTIPLE * iqr;
    let upper_limit = q75 + IQR_MULTIPLE * iqr;

    sorted.retain(|&v| {
        let v = f64::from(v);
        v > lower_limit && v < upper_limit
    });

    TrimmedSample {
        values: sorted,
        lower_limit,
        upper_limit,
    }
}
