//! Command-line interface and orchestration for rdstats
//!
//! This module implements the CLI commands and connects the cart dump loader,
//! the statistics engine, and the report writers. It handles argument parsing,
//! configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **stats**: Load a cart dump, compute per-group song length statistics with
//!   the configured limits, and write a CSV or XLSX report
//! - **filter**: Load a cart dump and write the requested fields of every
//!   remaining cart to a headerless CSV file
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file for syntax and usable limits
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. Both data commands share the `common` module for
//! logging setup and for the cart loading options (excluded groups, extra cuts).
//!
//! Statistics limits come from three layers: built-in defaults, the
//! `[statistics_limits]` table of the configuration file, and command-line flags,
//! each overriding the one before it.

mod common;
mod config;
mod filter;
mod host;
mod init;
mod run;
mod stats;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use common::{CartArgs, LogLevel};
pub use filter::{FilterArgs, filter_cart_report, write_filtered_carts};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use stats::{LimitArgs, StatsArgs, process_statistics};
pub use validate::{ValidateArgs, validate_config};
