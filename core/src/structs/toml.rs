use crate::error::ReportError;
use log::error;
use serde::Deserialize;
use std::str::from_utf8;

#[derive(Debug, Deserialize)]
pub struct ReportToml {
    /**Root of the mirrored `%SystemRoot%\System32\Tasks` directory */
    pub root_directory: String,
    pub output: Output,
    #[serde(default)]
    pub query: QueryOptions,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    /**One of line, table, json, csv, html */
    pub format: String,
    /**Destination file. Stdout when unset */
    pub path: Option<String>,
    /**HTML template file. `templates/report.html` when unset */
    pub template: Option<String>,
    /**Log level: error, warn, info, or debug */
    pub logging: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryOptions {
    /**Sort attributes applied in order. `(task_path, task_name)` when unset */
    pub sort_by: Option<Vec<String>>,
    #[serde(default)]
    pub filter_task_names: Vec<String>,
    #[serde(default)]
    pub filter_task_paths: Vec<String>,
    #[serde(default)]
    pub filter_trigger_kinds: Vec<String>,
    #[serde(default)]
    pub only_hidden: bool,
    #[serde(default)]
    pub include_raw: bool,
}

impl ReportToml {
    /// Parse an already read TOML parameter bundle
    pub fn parse_report_toml(toml_data: &[u8]) -> Result<ReportToml, ReportError> {
        let toml_results = toml::from_str(from_utf8(toml_data).unwrap_or_default());
        match toml_results {
            Ok(results) => Ok(results),
            Err(err) => {
                error!("[structs] Failed to parse report TOML data: {err:?}");
                Err(ReportError::InvalidInput(String::from(
                    "could not parse TOML parameter bundle",
                )))
            }
        }
    }
}
