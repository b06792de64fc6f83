use crate::error::ReportError;
use crate::filesystem::files::read_file;
use crate::output::output_report;
use crate::query::engine::{run_query, QueryParams};
use crate::structs::toml::ReportToml;
use crate::tasks::parser::collect_tasks;
use crate::utils::logging::log_level;
use log::{error, info};
use simplelog::{Config, SimpleLogger};

/// Recognized report formats
const FORMATS: [&str; 5] = ["line", "table", "json", "csv", "html"];

/// Parse a TOML parameter bundle at the provided path and run the report
pub fn parse_toml_file(path: &str) -> Result<(), ReportError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Could not read TOML file at {path}: {err:?}");
            return Err(ReportError::InvalidInput(format!(
                "could not read TOML file {path}"
            )));
        }
    };

    let config = ReportToml::parse_report_toml(&buffer)?;
    run_report(&config)
}

/// Walk the task root, run the query, and emit the configured report
pub fn run_report(config: &ReportToml) -> Result<(), ReportError> {
    let _ = SimpleLogger::init(log_level(config.output.logging.as_deref()), Config::default());

    // Parameter problems must surface before any walking starts
    if !FORMATS.contains(&config.output.format.as_str()) {
        error!("[core] Unknown output format {}", config.output.format);
        return Err(ReportError::InvalidInput(format!(
            "unknown output format {}",
            config.output.format
        )));
    }
    let params = QueryParams::from_options(&config.query)?;

    let records = collect_tasks(&config.root_directory)?;
    let report = run_query(records, &params);
    output_report(&report, &config.output)?;

    info!(
        "[core] Reported {} tasks from {}",
        report.rows.len(),
        config.root_directory
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_report;
    use crate::error::ReportError;
    use crate::structs::toml::{Output, QueryOptions, ReportToml};
    use std::path::PathBuf;

    fn test_root() -> String {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/tasks");
        test_location.display().to_string()
    }

    #[test]
    fn test_run_report() {
        let config = ReportToml {
            root_directory: test_root(),
            output: Output {
                format: String::from("json"),
                path: Some(String::from("./tmp_core_report.json")),
                template: None,
                logging: None,
            },
            query: QueryOptions::default(),
        };
        run_report(&config).unwrap();

        let report = std::fs::read_to_string("./tmp_core_report.json").unwrap();
        assert!(report.contains("ScheduledDefrag"));
        std::fs::remove_file("./tmp_core_report.json").unwrap();
    }

    #[test]
    fn test_run_report_bad_format() {
        let config = ReportToml {
            root_directory: test_root(),
            output: Output {
                format: String::from("yaml"),
                path: None,
                template: None,
                logging: None,
            },
            query: QueryOptions::default(),
        };
        let result = run_report(&config);
        assert!(matches!(result, Err(ReportError::InvalidInput(_))));
    }

    #[test]
    fn test_run_report_bad_root() {
        let config = ReportToml {
            root_directory: String::from("./no-such-root"),
            output: Output {
                format: String::from("json"),
                path: None,
                template: None,
                logging: None,
            },
            query: QueryOptions::default(),
        };
        let result = run_report(&config);
        assert!(matches!(result, Err(ReportError::InvalidInput(_))));
    }
}
