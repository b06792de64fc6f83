use crate::output::error::FormatError;
use crate::query::engine::{cell, ReportSet};
use log::error;

/// Output to `csv` format. Header row of column names followed by stringified
/// rows
pub(crate) fn csv_format(report: &ReportSet) -> Result<Vec<u8>, FormatError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    let header_result = writer.write_record(&report.columns);
    if let Err(err) = header_result {
        error!("[output] Failed to write csv header: {err:?}");
        return Err(FormatError::Serialize);
    }

    for row in &report.rows {
        let record: Vec<String> = report
            .columns
            .iter()
            .map(|column| cell(row, column))
            .collect();
        if let Err(err) = writer.write_record(&record) {
            error!("[output] Failed to write csv row: {err:?}");
            return Err(FormatError::Serialize);
        }
    }

    match writer.into_inner() {
        Ok(results) => Ok(results),
        Err(err) => {
            error!("[output] Failed to flush csv report: {err:?}");
            Err(FormatError::Serialize)
        }
    }
}
