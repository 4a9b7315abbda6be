use super::Host;
use super::common::{CartArgs, init_logging};
use super::config::Config;
use crate::Result;
use crate::carts::RivendellCart;
use crate::reports::write_report;
use crate::stats::{DurationRecord, ExclusionConfig, ReportOptions};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser};
use ohno::IntoAppError;
use std::io::Write;

const LOG_TARGET: &str = "  commands";

#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub carts: CartArgs,

    /// Add a table describing the statistics limits ahead of the group data
    #[arg(long)]
    pub write_limits: bool,

    /// Write every statistic instead of only the song count and bounds
    #[arg(long)]
    pub full_statistics: bool,

    /// Path to configuration file (default is `rdstats.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Overrides for the `[statistics_limits]` configuration table
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Statistics Limits")]
pub struct LimitArgs {
    /// Smallest standard deviation, in seconds, for which outliers are trimmed
    #[arg(long, value_name = "SECS")]
    pub smallest_stdev: Option<u32>,

    /// Groups with this many songs or fewer are never trimmed
    #[arg(long, value_name = "N")]
    pub minimum_population: Option<usize>,

    /// Standard deviations below the mean for the lower bound
    #[arg(long, value_name = "X")]
    pub lower_bound_multiple: Option<f64>,

    /// Standard deviations above the mean for the upper bound
    #[arg(long, value_name = "X")]
    pub upper_bound_multiple: Option<f64>,
}

impl LimitArgs {
    /// Replace the configured limits with any given on the command line.
    #[must_use]
    pub fn apply(&self, config: ExclusionConfig) -> ExclusionConfig {
        ExclusionConfig {
            smallest_stdev: self.smallest_stdev.unwrap_or(config.smallest_stdev),
            minimum_population_for_outliers: self.minimum_population.unwrap_or(config.minimum_population_for_outliers),
            lower_bound_multiple: self.lower_bound_multiple.unwrap_or(config.lower_bound_multiple),
            upper_bound_multiple: self.upper_bound_multiple.unwrap_or(config.upper_bound_multiple),
        }
    }
}

fn process_statistics_inner(args: &StatsArgs) -> Result<usize> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let limits = args.limits.apply(config.statistics_limits);
    limits.validate().into_app_err("invalid statistics limits")?;
    log::debug!(target: LOG_TARGET, "Using statistics limits {limits:?}");

    let carts = args.carts.load_carts(false)?;
    let records = carts.iter().map(RivendellCart::to_duration_record).collect::<Result<Vec<DurationRecord>>>()?;

    let options = ReportOptions {
        write_limits: args.write_limits,
        full_statistics: args.full_statistics,
    };

    let tables = crate::stats::run(records, &limits, options);
    write_report(&args.carts.output, &tables)?;

    Ok(tables.data.rows.len())
}

pub fn process_statistics<H: Host>(host: &mut H, args: &StatsArgs) -> Result<()> {
    init_logging(args.carts.log_level);

    match process_statistics_inner(args) {
        Ok(groups) => {
            let _ = writeln!(host.output(), "Wrote statistics for {groups} group(s) to {}", args.carts.output);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Unable to compute statistics: {e}");
            Err(e)
        }
    }
}
