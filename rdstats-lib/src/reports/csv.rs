use super::{ReportTable, ReportTables, common};
use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

/// Write the tables as consecutive CSV blocks, each starting with its own header row.
pub fn generate<W: Write>(tables: &ReportTables, writer: &mut W) -> Result<()> {
    for table in tables.iter() {
        write_table(table, writer)?;
    }

    Ok(())
}

fn write_table<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    write!(writer, "{}", escape_csv(table.corner))?;
    for header in &table.headers {
        write!(writer, ",{}", escape_csv(header))?;
    }
    writeln!(writer)?;

    for row in &table.rows {
        write!(writer, "{}", escape_csv(&row.label))?;
        for cell in &row.cells {
            write!(writer, ",{}", escape_csv(&common::format_cell(cell)))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
