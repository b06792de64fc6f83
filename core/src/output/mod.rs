use crate::error::ReportError;
use crate::query::engine::ReportSet;
use crate::structs::toml::Output;
use log::error;

pub(crate) mod error;
pub(crate) mod formats;
pub(crate) mod sink;

use self::formats::csv::csv_format;
use self::formats::html::{html_format, DEFAULT_TEMPLATE};
use self::formats::json::json_format;
use self::formats::line::line_format;
use self::formats::table::table_format;
use self::sink::write_report;

/// Render the record set in the configured format and write it to the sink
pub(crate) fn output_report(report: &ReportSet, output: &Output) -> Result<(), ReportError> {
    let data = match output.format.as_str() {
        "line" => line_format(report),
        "table" => table_format(report),
        "json" => json_format(report)
            .map_err(|_| ReportError::Output(String::from("could not serialize JSON report")))?,
        "csv" => csv_format(report)
            .map_err(|_| ReportError::Output(String::from("could not serialize CSV report")))?,
        "html" => {
            let template = output.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
            html_format(report, template)?
        }
        _ => {
            error!("[output] Unknown output format {}", output.format);
            return Err(ReportError::InvalidInput(format!(
                "unknown output format {}",
                output.format
            )));
        }
    };

    write_report(&data, output.path.as_deref()).map_err(|_| {
        ReportError::Output(format!(
            "could not write {} report",
            output.format
        ))
    })
}
