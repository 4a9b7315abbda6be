//! Report generation for group statistics
//!
//! This module renders the tables assembled by the statistics aggregator into
//! files an operator can open directly.
//!
//! # Implementation Model
//!
//! Reports are described by a small tabular model ([`ReportTables`]): an optional
//! one-row limits table and the per-group data table, each made of typed [`Cell`]s.
//! Two generators consume that model, each accessed through a `generate` function:
//! - **CSV**: the limits block followed by the data block, `\n` terminated
//! - **Excel**: native .xlsx with one worksheet per table
//!
//! [`write_report`] picks the generator from the output file extension and moves
//! any existing file at the destination aside first, keeping a single `_old`
//! generation.

mod common;
mod csv;
mod excel;
mod report_table;
mod rotation;

pub use common::format_duration;
pub use csv::generate as generate_csv;
pub use excel::generate as generate_xlsx;
pub use report_table::{Cell, ReportRow, ReportTable, ReportTables};
pub use rotation::{backup_existing, backup_path};

use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "   reports";

/// Output format, chosen from the destination file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Xlsx,
}

impl ReportFormat {
    /// `.xlsx` in any letter case selects a spreadsheet; anything else is CSV.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => Self::Xlsx,
            _ => Self::Csv,
        }
    }
}

/// Write the tables to `path`, backing up any file already there.
pub fn write_report(path: &Utf8Path, tables: &ReportTables) -> Result<()> {
    let _ = backup_existing(path)?;

    let format = ReportFormat::from_path(path);
    log::info!(target: LOG_TARGET, "Writing {format:?} report to '{path}'");

    match format {
        ReportFormat::Csv => {
            let mut output = String::new();
            generate_csv(tables, &mut output)?;
            fs::write(path, output).into_app_err_with(|| format!("writing report '{path}'"))?;
        }
        ReportFormat::Xlsx => {
            let mut file = fs::File::create(path).into_app_err_with(|| format!("creating report '{path}'"))?;
            generate_xlsx(tables, &mut file)?;
        }
    }

    Ok(())
}
