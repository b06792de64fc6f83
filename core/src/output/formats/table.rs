use crate::query::engine::{cell, ReportSet};
use comfy_table::{ContentArrangement, Table};

/// Output to `table` format. One wide table with a row per Task
pub(crate) fn table_format(report: &ReportSet) -> Vec<u8> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(report.columns.clone());

    for row in &report.rows {
        table.add_row(report.columns.iter().map(|column| cell(row, column)));
    }

    let mut data = table.to_string();
    data.push('\n');
    data.into_bytes()
}
