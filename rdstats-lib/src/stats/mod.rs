//! Duration statistics with outlier-robust acceptance bounds
//!
//! This module turns a flat list of `(group, duration)` observations into one
//! [`GroupStatistics`] per group and assembles the results into report tables.
//!
//! # Implementation Model
//!
//! Each group goes through two independent gates:
//!
//! 1. **Trimming** ([`outliers`]): groups larger than the minimum population whose
//!    spread reaches the smallest standard deviation have values on or beyond the
//!    1.5 × IQR fences removed. Everything else is kept as is.
//! 2. **Exclusion** ([`group_statistics`]): when the group is larger than the minimum
//!    population and the trimmed sample's population standard deviation exceeds the
//!    smallest standard deviation, acceptance bounds
//!    are set at `mean - lower_multiple × stdev` and `mean + upper_multiple × stdev`,
//!    snapped to quarter minutes, and the untrimmed sample is counted against them.
//!
//! The [`aggregator`] groups records, runs the calculator for each group, and lays
//! the results out as a limits table and a data table sorted by group name.

mod aggregator;
mod exclusion_config;
mod group_statistics;
mod outliers;
mod sample;

pub use aggregator::{
    DurationRecord, ReportOptions, StatisticsColumn, build_tables, calculate_statistics_per_group, group_durations, run,
};
pub use exclusion_config::ExclusionConfig;
pub use group_statistics::{GroupStatistics, quantize_to_nearest_interval, should_exclude};
pub use outliers::{MAX_DURATION, TrimmedSample, filter, should_trim};
