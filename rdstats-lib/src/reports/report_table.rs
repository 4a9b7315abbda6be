/// A single typed value in a report table.
///
/// Renderers decide how each variant is presented: durations become `H:MM:SS` text,
/// counts and numbers stay numeric where the format allows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Count(u64),

    /// A configuration multiple, always shown with a decimal point
    Number(f64),

    /// A percentage, shown without a trailing `.0`
    Percentage(f64),

    /// Seconds
    Duration(i64),

    /// A `(lower, upper)` pair of seconds
    DurationPair(i64, i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

/// A labelled grid of cells destined for one CSV block or one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    /// Worksheet name used by the spreadsheet renderer
    pub sheet_name: &'static str,

    /// Header of the row-label column
    pub corner: &'static str,

    pub headers: Vec<&'static str>,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    #[must_use]
    pub const fn new(sheet_name: &'static str, corner: &'static str, headers: Vec<&'static str>) -> Self {
        Self {
            sheet_name,
            corner,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, label: impl Into<String>, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.headers.len(), "row width must match the header");
        self.rows.push(ReportRow {
            label: label.into(),
            cells,
        });
    }
}

/// Everything a statistics report contains, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTables {
    pub limits: Option<ReportTable>,
    pub data: ReportTable,
}

impl ReportTables {
    /// Tables in the order they are written.
    pub fn iter(&self) -> impl Iterator<Item = &ReportTable> {
        self.limits.iter().chain(core::iter::once(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row() {
        let mut table = ReportTable::new("Data", "Group Name", vec!["Number of Songs"]);
        table.push_row("ROCK", vec![Cell::Count(12)]);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].label, "ROCK");
        assert_eq!(table.rows[0].cells, vec![Cell::Count(12)]);
    }

    #[test]
    fn test_iter_puts_limits_first() {
        let tables = ReportTables {
            limits: Some(ReportTable::new("Limits", "", vec![])),
            data: ReportTable::new("Data", "Group Name", vec![]),
        };
        let names: Vec<&str> = tables.iter().map(|t| t.sheet_name).collect();
        assert_eq!(names, vec!["Limits", "Data"]);
    }

    #[test]
    fn test_iter_without_limits() {
        let tables = ReportTables {
            limits: None,
            data: ReportTable::new("Data", "Group Name", vec![]),
        };
        assert_eq!(tables.iter().count(), 1);
    }
}
