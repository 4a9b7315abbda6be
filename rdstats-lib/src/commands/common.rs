//! Argument handling and setup shared between the stats and filter commands.

use crate::Result;
use crate::carts::{CartLoader, RivendellCart, read_list_file};
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use std::collections::HashSet;

const LOG_TARGET: &str = "  commands";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments shared between commands that read a cart dump
#[derive(Args, Debug)]
pub struct CartArgs {
    /// Cart data dump exported by RDLibrary ("Cart Data Dump (CSV)")
    #[arg(value_name = "CART_DUMP")]
    pub cart_dump: Utf8PathBuf,

    /// File to write; an existing file is kept as `<name>_old.<ext>`
    #[arg(value_name = "OUTPUT")]
    pub output: Utf8PathBuf,

    /// Keep every cut of a cart instead of only the lowest-numbered one
    #[arg(long)]
    pub include_all_cuts: bool,

    /// File listing groups to leave out, one group name per line
    #[arg(long, value_name = "PATH")]
    pub excluded_groups_file: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

impl CartArgs {
    /// Load the cart dump with the group and cut filters these arguments describe.
    pub fn load_carts(&self, include_macros: bool) -> Result<Vec<RivendellCart>> {
        let excluded_groups: HashSet<String> = match &self.excluded_groups_file {
            Some(path) => read_list_file(path)?.into_iter().collect(),
            None => HashSet::new(),
        };

        if !excluded_groups.is_empty() {
            log::debug!(target: LOG_TARGET, "Excluding {} group(s)", excluded_groups.len());
        }

        let loader = CartLoader {
            excluded_groups,
            include_macros,
            include_all_cuts: self.include_all_cuts,
        };

        loader.load_file(&self.cart_dump)
    }
}

/// Initialize the logger for the given level.
///
/// Only the first call in a process installs a logger; later calls are ignored.
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
