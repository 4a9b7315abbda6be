//! Command dispatch logic for rdstats

use super::{FilterArgs, InitArgs, StatsArgs, ValidateArgs, filter_cart_report, init_config, process_statistics, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "rdstats", author, version, long_about = None)]
#[command(about = "Song length statistics and reports for Rivendell cart dumps")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: RdstatsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RdstatsSubcommand {
    /// Compute per-group song length statistics and write a CSV or XLSX report
    Stats(Box<StatsArgs>),
    /// Write selected fields of every cart to a CSV file
    Filter(Box<FilterArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        RdstatsSubcommand::Stats(stats_args) => process_statistics(host, stats_args),
        RdstatsSubcommand::Filter(filter_args) => filter_cart_report(host, filter_args),
        RdstatsSubcommand::Init(init_args) => init_config(host, init_args),
        RdstatsSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
