use crate::query::engine::{cell, ReportSet};

/// Record separator for the narrow terminal format
const DELIMITER: &str = "===========================";

/// Output to `line` format. One attribute per line, records separated by a
/// delimiter line
pub(crate) fn line_format(report: &ReportSet) -> Vec<u8> {
    let mut lines = String::new();
    for (index, row) in report.rows.iter().enumerate() {
        if index != 0 {
            lines.push_str(DELIMITER);
            lines.push('\n');
        }
        for column in &report.columns {
            lines.push_str(column);
            lines.push_str(": ");
            lines.push_str(&cell(row, column));
            lines.push('\n');
        }
    }
    lines.into_bytes()
}
