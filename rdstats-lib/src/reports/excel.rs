use super::{Cell, ReportTable, ReportTables, common};
use crate::Result;
use rust_xlsxwriter::{DocProperties, Format, FormatAlign, Workbook, Worksheet};
use std::io::Write;

pub fn generate<W: Write>(tables: &ReportTables, writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new().set_author("rdstats");
    let _ = workbook.set_properties(&properties);

    let header_format = Format::new().set_bold();
    let label_format = Format::new().set_bold().set_align(FormatAlign::Left);

    for table in tables.iter() {
        let worksheet = workbook.add_worksheet().set_name(table.sheet_name)?;
        write_table(worksheet, table, &header_format, &label_format)?;
    }

    let data = workbook.save_to_buffer()?;
    writer.write_all(&data)?;

    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
#[expect(
    clippy::cast_possible_truncation,
    reason = "Row and column indices are limited by Excel's u32/u16 sheet limits"
)]
fn write_table(worksheet: &mut Worksheet, table: &ReportTable, header_format: &Format, label_format: &Format) -> Result<()> {
    worksheet.write_string_with_format(0, 0, table.corner, header_format)?;
    for (col_idx, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, (col_idx + 1) as u16, *header, header_format)?;
    }

    // Freeze the group names and the header row
    worksheet.set_freeze_panes(1, 1)?;

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        worksheet.write_string_with_format(row_num, 0, &row.label, label_format)?;

        for (col_idx, cell) in row.cells.iter().enumerate() {
            write_cell(worksheet, row_num, (col_idx + 1) as u16, cell)?;
        }
    }

    worksheet.autofit();
    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
#[expect(clippy::cast_precision_loss, reason = "Intentional conversion to f64 for Excel output")]
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Count(n) => {
            worksheet.write_number(row, col, *n as f64)?;
        }
        Cell::Number(n) | Cell::Percentage(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        Cell::Duration(_) | Cell::DurationPair(..) => {
            worksheet.write_string(row, col, common::format_cell(cell))?;
        }
    }
    Ok(())
}
