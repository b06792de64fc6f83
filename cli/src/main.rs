use clap::Parser;
use log::info;
use schtasks_core::core::{parse_toml_file, run_report};
use schtasks_core::error::ReportError;
use schtasks_core::structs::toml::{Output, QueryOptions, ReportToml};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to a TOML parameter bundle
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Root of the mirrored System32\Tasks directory
    #[clap(short, long, value_parser)]
    root: Option<String>,

    /// Report format: line, table, json, csv, or html
    #[clap(short, long, value_parser, default_value = "html")]
    format: String,

    /// Report destination file. Stdout when unset
    #[clap(short, long, value_parser)]
    output: Option<String>,

    /// HTML template file
    #[clap(long, value_parser)]
    template: Option<String>,

    /// Comma separated task names to keep
    #[clap(long, value_parser, value_delimiter = ',')]
    filter_names: Vec<String>,

    /// Comma separated task paths to keep
    #[clap(long, value_parser, value_delimiter = ',')]
    filter_paths: Vec<String>,

    /// Comma separated trigger kinds to keep
    #[clap(long, value_parser, value_delimiter = ',')]
    filter_triggers: Vec<String>,

    /// Comma separated sort attributes, applied in order
    #[clap(long, value_parser, value_delimiter = ',')]
    sort_by: Option<Vec<String>>,

    /// Keep only hidden tasks
    #[clap(long, action)]
    only_hidden: bool,

    /// Add flattened raw XML columns to the report
    #[clap(long, action)]
    include_raw: bool,

    /// Log level: error, warn, info, or debug
    #[clap(long, value_parser, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let report_result = if let Some(toml) = &args.toml {
        parse_toml_file(toml)
    } else if let Some(root) = &args.root {
        let config = ReportToml {
            root_directory: root.clone(),
            output: Output {
                format: args.format.clone(),
                path: args.output.clone(),
                template: args.template.clone(),
                logging: Some(args.log_level.clone()),
            },
            query: QueryOptions {
                sort_by: args.sort_by.clone(),
                filter_task_names: args.filter_names.clone(),
                filter_task_paths: args.filter_paths.clone(),
                filter_trigger_kinds: args.filter_triggers.clone(),
                only_hidden: args.only_hidden,
                include_raw: args.include_raw,
            },
        };
        run_report(&config)
    } else {
        eprintln!("[schtasks-report] No TOML file or task root provided!");
        process::exit(2);
    };

    match report_result {
        Ok(_) => info!("[schtasks-report] Report complete"),
        Err(err) => {
            eprintln!("[schtasks-report] {err}");
            process::exit(exit_code(&err));
        }
    }
}

/// Exit code contract: 2 for parameter problems, 3 for unreadable or malformed
/// task files, 4 for a missing HTML template, 1 for anything else
fn exit_code(err: &ReportError) -> i32 {
    match err {
        ReportError::InvalidInput(_) => 2,
        ReportError::FileUnreadable(_) | ReportError::MalformedXml(_) => 3,
        ReportError::TemplateUnreadable(_) => 4,
        ReportError::Output(_) => 1,
    }
}
