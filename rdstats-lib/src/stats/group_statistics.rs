use super::ExclusionConfig;
use super::outliers::{self, MAX_DURATION};
use super::sample::{mean, population_stdev, round_to_seconds};

/// Acceptance bounds are snapped to multiples of this many seconds.
const BOUND_INTERVAL: u32 = 15;

/// Duration statistics of a single group, computed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatistics {
    pub group_name: String,
    pub number_of_songs: usize,

    /// Extremes of the untrimmed sample
    pub shortest_song_length: u32,
    pub longest_song_length: u32,

    /// Trim fences actually used, rounded half-to-even to whole seconds, or `(0, MAX_DURATION)` when trimming was skipped
    pub outlier_limits: (i64, i64),

    /// Mean and population standard deviation of the trimmed sample
    pub mean: u32,
    pub stdev: u32,

    pub lower_bound: u32,
    pub upper_bound: u32,

    /// Counted against the untrimmed sample
    pub number_of_songs_shorter_than_lower_bound: usize,
    pub number_of_songs_longer_than_upper_bound: usize,

    pub percentage_of_songs_excluded: f64,
}

impl GroupStatistics {
    /// Compute the statistics of one group.
    ///
    /// The sample is expected to be non-empty; an empty sample yields all-zero extremes
    /// and the "accept everything" bounds.
    #[must_use]
    pub fn compute(group_name: impl Into<String>, sample: &[u32], config: &ExclusionConfig) -> Self {
        let mut sorted = sample.to_vec();
        sorted.sort_unstable();

        let number_of_songs = sorted.len();
        let shortest_song_length = sorted.first().copied().unwrap_or_default();
        let longest_song_length = sorted.last().copied().unwrap_or_default();

        let trimmed = outliers::filter(&sorted, config);
        let outlier_limits = (round_limit(trimmed.lower_limit), round_limit(trimmed.upper_limit));

        let mean = round_to_seconds(mean(&trimmed.values));
        let stdev_raw = population_stdev(&trimmed.values);
        let stdev = round_to_seconds(stdev_raw);

        let mut stats = Self {
            group_name: group_name.into(),
            number_of_songs,
            shortest_song_length,
            longest_song_length,
            outlier_limits,
            mean,
            stdev,
            lower_bound: 0,
            upper_bound: MAX_DURATION,
            number_of_songs_shorter_than_lower_bound: 0,
            number_of_songs_longer_than_upper_bound: 0,
            percentage_of_songs_excluded: 0.0,
        };

        if !should_exclude(number_of_songs, stdev_raw, config) {
            return stats;
        }

        let mean = f64::from(mean);
        let lower_bound_raw = mean - config.lower_bound_multiple * stdev_raw;
        stats.lower_bound = if lower_bound_raw < 0.0 {
            0
        } else {
            quantize_to_nearest_interval(lower_bound_raw)
        };
        stats.upper_bound = quantize_to_nearest_interval(mean + config.upper_bound_multiple * stdev_raw);

        stats.number_of_songs_shorter_than_lower_bound = sorted.iter().filter(|&&v| v < stats.lower_bound).count();
        stats.number_of_songs_longer_than_upper_bound = sorted.iter().filter(|&&v| v > stats.upper_bound).count();
        stats.percentage_of_songs_excluded = percentage(
            stats.number_of_songs_shorter_than_lower_bound + stats.number_of_songs_longer_than_upper_bound,
            number_of_songs,
        );

        stats
    }
}

/// Whether a group is large enough, and its trimmed spread wide enough, to derive acceptance bounds from.
///
/// Groups of `minimum_population_for_outliers` songs or fewer never qualify, nor does an
/// undefined (NaN) standard deviation.
pub fn should_exclude(number_of_songs: usize, stdev_raw: f64, config: &ExclusionConfig) -> bool {
    number_of_songs > config.minimum_population_for_outliers && stdev_raw > f64::from(config.smallest_stdev)
}

/// Snap a duration to the nearest quarter minute.
///
/// Remainders below 8 round down and remainders of 8 or more round up, after first
/// rounding the input to whole seconds.
pub fn quantize_to_nearest_interval(value: f64) -> u32 {
    let value = round_to_seconds(value);
    match value % BOUND_INTERVAL {
        0 => value,
        r if r < 8 => value - r,
        r => value.saturating_add(BOUND_INTERVAL - r),
    }
}

#[expect(clippy::cast_possible_truncation, reason = "Fences are bounded by sample values of at most u32::MAX")]
fn round_limit(limit: f64) -> i64 {
    limit.round_ties_even() as i64
}

/// Percentage of `part` in `whole`, rounded half-to-even to one decimal place.
#[expect(clippy::cast_precision_loss, reason = "Counts are far below 2^52")]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    (1000.0 * part as f64 / whole as f64).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_exact_multiple() {
        assert_eq!(quantize_to_nearest_interval(135.0), 135);
        assert_eq!(quantize_to_nearest_interval(0.0), 0);
    }

    #[test]
    fn test_quantize_rounds_down_below_eight() {
        assert_eq!(quantize_to_nearest_interval(136.0), 135);
        assert_eq!(quantize_to_nearest_interval(142.0), 135);
    }

    #[test]
    fn test_quantize_rounds_up_from_eight() {
        assert_eq!(quantize_to_nearest_interval(143.0), 150);
        assert_eq!(quantize_to_nearest_interval(149.0), 150);
    }

    #[test]
    fn test_quantize_rounds_input_first() {
        // 142.5 rounds half-to-even to 142, which snaps down
        assert_eq!(quantize_to_nearest_interval(142.5), 135);
        // 142.6 rounds to 143, which snaps up
        assert_eq!(quantize_to_nearest_interval(142.6), 150);
    }

    #[test]
    fn test_quantize_is_idempotent() {
        for v in 0..2000_u32 {
            let once = quantize_to_nearest_interval(f64::from(v));
            let twice = quantize_to_nearest_interval(f64::from(once));
            assert_eq!(once, twice, "quantizing {v} twice changed the result");
            assert_eq!(once % BOUND_INTERVAL, 0);
        }
    }

    #[test]
    fn test_should_exclude() {
        let config = ExclusionConfig::default();
        assert!(!should_exclude(10, 15.0, &config));
        assert!(should_exclude(10, 15.1, &config));
        assert!(!should_exclude(10, 0.0, &config));
        assert!(!should_exclude(10, f64::NAN, &config));
    }

    #[test]
    fn test_should_exclude_requires_population() {
        let config = ExclusionConfig::default();
        assert!(!should_exclude(3, 600.0, &config));
        assert!(!should_exclude(4, 600.0, &config));
        assert!(should_exclude(5, 600.0, &config));
    }

    #[test]
    fn test_sentinel_path_at_minimum_population() {
        let config = ExclusionConfig::default();
        let stats = GroupStatistics::compute("SPECIALS", &[60, 240, 540, 1200], &config);

        assert_eq!(stats.number_of_songs, 4);
        assert_eq!(stats.outlier_limits, (0, 86_399));
        assert_eq!(stats.lower_bound, 0);
        assert_eq!(stats.upper_bound, 86_399);
        assert_eq!(stats.number_of_songs_shorter_than_lower_bound, 0);
        assert_eq!(stats.number_of_songs_longer_than_upper_bound, 0);
        assert!(stats.percentage_of_songs_excluded.abs() < f64::EPSILON);
    }

    #[test]
    fn test_sentinel_path_for_uneven_small_group() {
        let config = ExclusionConfig::default();
        let stats = GroupStatistics::compute("SWEEPERS", &[100, 100, 190], &config);
        assert_eq!(stats.lower_bound, 0);
        assert_eq!(stats.upper_bound, 86_399);
    }

    #[test]
    fn test_sentinel_path_for_small_group() {
        let config = ExclusionConfig::default();
        let stats = GroupStatistics::compute("JINGLES", &[5, 300, 1800], &config);

        assert_eq!(stats.number_of_songs, 3);
        assert_eq!(stats.shortest_song_length, 5);
        assert_eq!(stats.longest_song_length, 1800);
        assert_eq!(stats.outlier_limits, (0, 86_399));
        assert_eq!(stats.lower_bound, 0);
        assert_eq!(stats.upper_bound, 86_399);
        assert_eq!(stats.number_of_songs_shorter_than_lower_bound, 0);
        assert_eq!(stats.number_of_songs_longer_than_upper_bound, 0);
        assert!(stats.percentage_of_songs_excluded.abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_durations_skip_exclusion() {
        let config = ExclusionConfig::default();
        let stats = GroupStatistics::compute("LEGAL_ID", &[7; 20], &config);

        assert_eq!(stats.mean, 7);
        assert_eq!(stats.stdev, 0);
        assert_eq!(stats.outlier_limits, (0, 86_399));
        assert_eq!(stats.lower_bound, 0);
        assert_eq!(stats.upper_bound, 86_399);
    }

    #[test]
    fn test_fully_trimmed_sample_skips_exclusion() {
        let config = ExclusionConfig::default();
        let stats = GroupStatistics::compute("PSA", &[10, 10, 10, 10, 10, 10, 10, 10, 200], &config);

        assert_eq!(stats.number_of_songs, 9);
        assert_eq!(stats.longest_song_length, 200);
        assert_eq!(stats.outlier_limits, (10, 10));
        assert_eq!(stats.mean, 0);
        assert_eq!(stats.stdev, 0);
        assert_eq!(stats.lower_bound, 0);
        assert_eq!(stats.upper_bound, 86_399);
        assert_eq!(stats.number_of_songs_longer_than_upper_bound, 0);
    }

    #[test]
    fn test_trimmed_outlier_counted_against_untrimmed_sample() {
        let config = ExclusionConfig::default();
        let sample = [120, 150, 180, 200, 210, 220, 240, 270, 300, 2400];
        let stats = GroupStatistics::compute("ROCK", &sample, &config);

        // q25 = 185, q75 = 262.5, fences at 68.75 and 378.75; 2400 is trimmed
        assert_eq!(stats.outlier_limits, (69, 379));
        assert_eq!(stats.mean, 210);
        assert_eq!(stats.stdev, 53);

        // 210 - 1.5 * 53.12 = 130.3 -> 135; 210 + 3 * 53.12 = 369.4 -> 375
        assert_eq!(stats.lower_bound, 135);
        assert_eq!(stats.upper_bound, 375);
        assert_eq!(stats.number_of_songs_shorter_than_lower_bound, 1);
        assert_eq!(stats.number_of_songs_longer_than_upper_bound, 1);
        assert!((stats.percentage_of_songs_excluded - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_bracket_mean() {
        let config = ExclusionConfig::default();
        let sample = [120, 150, 180, 200, 210, 220, 240, 270, 300, 2400];
        let stats = GroupStatistics::compute("ROCK", &sample, &config);
        assert!(stats.lower_bound <= stats.mean);
        assert!(stats.mean <= stats.upper_bound);
    }

    #[test]
    fn test_negative_lower_bound_clamps_to_zero() {
        let config = ExclusionConfig { lower_bound_multiple: 10.0, ..ExclusionConfig::default() };
        let sample = [120, 150, 180, 200, 210, 220, 240, 270, 300, 2400];
        let stats = GroupStatistics::compute("ROCK", &sample, &config);
        assert_eq!(stats.lower_bound, 0);
        assert_eq!(stats.number_of_songs_shorter_than_lower_bound, 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert!((percentage(1, 3) - 33.3).abs() < 1e-9);
        assert!((percentage(2, 3) - 66.7).abs() < 1e-9);
        assert!((percentage(0, 5)).abs() < f64::EPSILON);
        assert!((percentage(3, 0)).abs() < f64::EPSILON);
    }
}
