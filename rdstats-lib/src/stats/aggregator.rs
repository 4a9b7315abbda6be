use super::{ExclusionConfig, GroupStatistics};
use crate::reports::{Cell, ReportTable, ReportTables};
use std::collections::BTreeMap;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

const LOG_TARGET: &str = "     stats";

/// A single duration observation tagged with the group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationRecord {
    pub group_name: String,
    pub seconds: u32,
}

impl DurationRecord {
    #[must_use]
    pub fn new(group_name: impl Into<String>, seconds: u32) -> Self {
        Self {
            group_name: group_name.into(),
            seconds,
        }
    }
}

/// Controls what the assembled tables contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include the one-row table describing the exclusion limits
    pub write_limits: bool,

    /// Use every statistic column instead of the condensed count and bounds
    pub full_statistics: bool,
}

/// Columns of the data table, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum StatisticsColumn {
    #[strum(serialize = "Number of Songs")]
    NumberOfSongs,
    #[strum(serialize = "Shortest Song Length")]
    ShortestSongLength,
    #[strum(serialize = "Longest Song Length")]
    LongestSongLength,
    #[strum(serialize = "Outlier Limits")]
    OutlierLimits,
    #[strum(serialize = "Mean")]
    Mean,
    #[strum(serialize = "Standard Deviation")]
    StandardDeviation,
    #[strum(serialize = "Lower Bound")]
    LowerBound,
    #[strum(serialize = "Number of Songs < Lower Bound")]
    SongsBelowLowerBound,
    #[strum(serialize = "Upper Bound")]
    UpperBound,
    #[strum(serialize = "Number of Songs > Upper Bound")]
    SongsAboveUpperBound,
    #[strum(serialize = "Percent of Songs Excluded")]
    PercentExcluded,
}

impl StatisticsColumn {
    /// Whether the column is part of the condensed report.
    #[must_use]
    pub const fn is_condensed(self) -> bool {
        matches!(self, Self::NumberOfSongs | Self::LowerBound | Self::UpperBound)
    }

    /// Columns to emit, in order.
    pub fn selected(full_statistics: bool) -> impl Iterator<Item = Self> {
        Self::iter().filter(move |column| full_statistics || column.is_condensed())
    }

    #[must_use]
    pub fn header(self) -> &'static str {
        self.into()
    }

    fn cell(self, stats: &GroupStatistics) -> Cell {
        match self {
            Self::NumberOfSongs => Cell::Count(stats.number_of_songs as u64),
            Self::ShortestSongLength => Cell::Duration(stats.shortest_song_length.into()),
            Self::LongestSongLength => Cell::Duration(stats.longest_song_length.into()),
            Self::OutlierLimits => Cell::DurationPair(stats.outlier_limits.0, stats.outlier_limits.1),
            Self::Mean => Cell::Duration(stats.mean.into()),
            Self::StandardDeviation => Cell::Duration(stats.stdev.into()),
            Self::LowerBound => Cell::Duration(stats.lower_bound.into()),
            Self::SongsBelowLowerBound => Cell::Count(stats.number_of_songs_shorter_than_lower_bound as u64),
            Self::UpperBound => Cell::Duration(stats.upper_bound.into()),
            Self::SongsAboveUpperBound => Cell::Count(stats.number_of_songs_longer_than_upper_bound as u64),
            Self::PercentExcluded => Cell::Percentage(stats.percentage_of_songs_excluded),
        }
    }
}

/// Partition durations by group label.
///
/// Every key in the result has at least one duration.
pub fn group_durations(records: impl IntoIterator<Item = DurationRecord>) -> BTreeMap<String, Vec<u32>> {
    let mut groups: BTreeMap<String, Vec<u32>> = BTreeMap::new();
    for record in records {
        groups.entry(record.group_name).or_default().push(record.seconds);
    }

    groups
}

/// Compute the statistics of every group, ordered by group name.
pub fn calculate_statistics_per_group(groups: &BTreeMap<String, Vec<u32>>, config: &ExclusionConfig) -> Vec<GroupStatistics> {
    groups
        .iter()
        .map(|(group_name, durations)| {
            let stats = GroupStatistics::compute(group_name.as_str(), durations, config);
            log::debug!(
                target: LOG_TARGET,
                "Group '{group_name}': {} songs, mean {}s, stdev {}s, bounds {}s..{}s",
                stats.number_of_songs,
                stats.mean,
                stats.stdev,
                stats.lower_bound,
                stats.upper_bound
            );
            stats
        })
        .collect()
}

/// Assemble the limits and data tables from computed statistics.
///
/// Rows of the data table are sorted by group name regardless of the input order.
pub fn build_tables(statistics: &[GroupStatistics], config: &ExclusionConfig, options: ReportOptions) -> ReportTables {
    let limits = options.write_limits.then(|| limits_table(config));

    let columns: Vec<StatisticsColumn> = StatisticsColumn::selected(options.full_statistics).collect();
    let mut data = ReportTable::new("Data", "Group Name", columns.iter().map(|column| column.header()).collect());

    let mut sorted: Vec<&GroupStatistics> = statistics.iter().collect();
    sorted.sort_by(|a, b| a.group_name.cmp(&b.group_name));

    for stats in sorted {
        data.push_row(stats.group_name.clone(), columns.iter().map(|column| column.cell(stats)).collect());
    }

    ReportTables { limits, data }
}

fn limits_table(config: &ExclusionConfig) -> ReportTable {
    let mut table = ReportTable::new(
        "Limits",
        "",
        vec![
            "Smallest Standard Deviation",
            "Minimum Population for Outliers",
            "Lower Bound Multiple",
            "Upper Bound Multiple",
        ],
    );

    table.push_row(
        "Statistics Limits",
        vec![
            Cell::Duration(config.smallest_stdev.into()),
            Cell::Count(config.minimum_population_for_outliers as u64),
            Cell::Number(config.lower_bound_multiple),
            Cell::Number(config.upper_bound_multiple),
        ],
    );

    table
}

/// Group the records, compute every group's statistics, and assemble the report tables.
pub fn run(records: impl IntoIterator<Item = DurationRecord>, config: &ExclusionConfig, options: ReportOptions) -> ReportTables {
    let groups = group_durations(records);
    log::info!(target: LOG_TARGET, "Computing statistics for {} group(s)", groups.len());

    let statistics = calculate_statistics_per_group(&groups, config);
    build_tables(&statistics, config, options)
}
