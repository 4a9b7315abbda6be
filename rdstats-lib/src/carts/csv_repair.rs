//! Repair of cart dumps whose rows were split across physical lines.
//!
//! RDLibrary writes embedded line breaks from free-text fields verbatim, so one
//! record can span several lines, sometimes with the break inside a quoted field
//! and sometimes outside of any quotes. A line that parses into fewer fields than
//! the header is joined with the next line until the record is complete.

use crate::Result;
use csv::{ReaderBuilder, StringRecord};
use ohno::bail;

const LOG_TARGET: &str = "     carts";

/// Rejoin records broken across lines, keeping the header and complete lines as is.
///
/// Each break is replaced by a single space after trimming the leading fragment.
/// A fragment still incomplete at the end of the input is dropped.
pub fn repair_cart_dump(text: &str) -> Result<String> {
    let mut lines = text.split_inclusive('\n');
    let Some(header) = lines.next() else {
        return Ok(String::new());
    };

    let expected_fields = count_fields(header)?;
    let mut output = String::with_capacity(text.len());
    output.push_str(header);

    let mut joined_lines = 0;
    'records: while let Some(line) = lines.next() {
        let mut record = line.to_string();
        let mut fields = count_fields(&record)?;

        while fields < expected_fields {
            let Some(next_line) = lines.next() else {
                log::warn!(target: LOG_TARGET, "Dropping incomplete record at end of cart dump: '{}'", record.trim());
                break 'records;
            };

            record = format!("{} {next_line}", record.trim());
            fields = count_fields(&record)?;
            joined_lines += 1;

            if fields > expected_fields {
                bail!(
                    "the cart dump has errors that cannot be repaired automatically: expected {expected_fields} fields but found {fields} in '{}'",
                    record.trim()
                );
            }
        }

        output.push_str(&record);
    }

    if joined_lines > 0 {
        log::info!(target: LOG_TARGET, "Rejoined {joined_lines} line break(s) inside cart dump records");
    }

    Ok(output)
}

/// Number of fields in the first record of `line`; an empty line has none.
fn count_fields(line: &str) -> Result<usize> {
    let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    if reader.read_record(&mut record)? {
        Ok(record.len())
    } else {
        Ok(0)
    }
}
