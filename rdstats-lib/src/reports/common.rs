//! Common utilities shared across report generators.

use super::Cell;

/// Format seconds as `H:MM:SS`, with as many hour digits as needed.
///
/// Negative values keep their sign in front of the magnitude.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    let secs = magnitude % 60;
    format!("{sign}{hours}:{minutes:02}:{secs:02}")
}

/// Format a pair of durations as a quoted tuple, e.g. `('0:00:20', '0:06:32')`.
pub fn format_duration_pair(lower: i64, upper: i64) -> String {
    format!("('{}', '{}')", format_duration(lower), format_duration(upper))
}

/// Render a cell as plain text.
///
/// Numbers always show a decimal point (`3.0`), percentages drop a trailing `.0` (`6`).
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Count(n) => n.to_string(),
        Cell::Number(n) => format!("{n:?}"),
        Cell::Percentage(p) => p.to_string(),
        Cell::Duration(d) => format_duration(*d),
        Cell::DurationPair(lower, upper) => format_duration_pair(*lower, *upper),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(7), "0:00:07");
        assert_eq!(format_duration(207), "0:03:27");
        assert_eq!(format_duration(1534), "0:25:34");
        assert_eq!(format_duration(3723), "1:02:03");
        assert_eq!(format_duration(86_399), "23:59:59");
        assert_eq!(format_duration(90_000), "25:00:00");
    }

    #[test]
    fn test_format_negative_duration() {
        assert_eq!(format_duration(-5), "-0:00:05");
        assert_eq!(format_duration(-3723), "-1:02:03");
    }

    #[test]
    fn test_format_duration_pair() {
        assert_eq!(format_duration_pair(20, 392), "('0:00:20', '0:06:32')");
        assert_eq!(format_duration_pair(0, 86_399), "('0:00:00', '23:59:59')");
    }

    #[test]
    fn test_format_cell_numbers() {
        assert_eq!(format_cell(&Cell::Number(1.5)), "1.5");
        assert_eq!(format_cell(&Cell::Number(3.0)), "3.0");
        assert_eq!(format_cell(&Cell::Percentage(6.0)), "6");
        assert_eq!(format_cell(&Cell::Percentage(9.1)), "9.1");
        assert_eq!(format_cell(&Cell::Percentage(0.0)), "0");
        assert_eq!(format_cell(&Cell::Count(1778)), "1778");
    }

    #[test]
    fn test_format_cell_durations() {
        assert_eq!(format_cell(&Cell::Duration(15)), "0:00:15");
        assert_eq!(format_cell(&Cell::DurationPair(72, 364)), "('0:01:12', '0:06:04')");
    }
}
