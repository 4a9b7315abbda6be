#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for rdstats
//!
//! This library consolidates all functionality for the rdstats tool, which reads the
//! cart data dump exported by Rivendell's RDLibrary and produces per-group duration
//! statistics and filtered cart listings.
//!
//! # Module Organization
//!
//! - [`carts`]: Loading, repairing, and filtering the cart data dump
//! - [`stats`]: Outlier trimming, per-group statistics, and aggregation into tables
//! - [`reports`]: Tabular report model and the CSV and spreadsheet writers
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod carts;
#[cfg(not(any(debug_assertions, test)))]
mod carts;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod stats;
#[cfg(not(any(debug_assertions, test)))]
mod stats;

pub use crate::commands::{Host, run};
