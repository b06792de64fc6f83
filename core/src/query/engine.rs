use super::attributes::Attribute;
use super::raw::flatten_tree;
use crate::error::ReportError;
use crate::structs::toml::QueryOptions;
use crate::tasks::parser::TaskRecord;
use common::tasks::{TaskEntry, TriggerKind};
use log::error;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Validated query parameters from the TOML or CLI option bundle
pub(crate) struct QueryParams {
    sort_by: Vec<Attribute>,
    filter_task_names: HashSet<String>,
    filter_task_paths: HashSet<String>,
    filter_trigger_kinds: HashSet<String>,
    only_hidden: bool,
    include_raw: bool,
}

impl QueryParams {
    /// Check attribute and trigger names against their closed sets before any
    /// walking starts
    pub(crate) fn from_options(options: &QueryOptions) -> Result<QueryParams, ReportError> {
        let sort_by = match &options.sort_by {
            Some(names) if !names.is_empty() => {
                let mut attributes = Vec::new();
                for name in names {
                    match Attribute::from_name(name) {
                        Some(attribute) => attributes.push(attribute),
                        None => {
                            error!("[query] Unknown sort attribute {name}");
                            return Err(ReportError::InvalidInput(format!(
                                "unknown sort attribute {name}"
                            )));
                        }
                    }
                }
                attributes
            }
            _ => vec![Attribute::TaskPath, Attribute::TaskName],
        };

        for kind in &options.filter_trigger_kinds {
            if TriggerKind::from_name(kind).is_none() {
                error!("[query] Unknown trigger kind {kind} in filter");
                return Err(ReportError::InvalidInput(format!(
                    "unknown trigger kind {kind}"
                )));
            }
        }

        Ok(QueryParams {
            sort_by,
            filter_task_names: options.filter_task_names.iter().cloned().collect(),
            filter_task_paths: options.filter_task_paths.iter().cloned().collect(),
            filter_trigger_kinds: options.filter_trigger_kinds.iter().cloned().collect(),
            only_hidden: options.only_hidden,
            include_raw: options.include_raw,
        })
    }
}

/// One report row. The flattened raw columns are empty unless the raw
/// projection was requested
#[derive(Debug, Serialize)]
pub(crate) struct TaskRow {
    #[serde(flatten)]
    pub(crate) entry: TaskEntry,
    #[serde(flatten)]
    pub(crate) raw: BTreeMap<String, String>,
}

/// Final record set handed to the report formats
pub(crate) struct ReportSet {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<TaskRow>,
}

/// Sort, filter, and project the collected records
pub(crate) fn run_query(records: Vec<TaskRecord>, params: &QueryParams) -> ReportSet {
    let mut records = records;
    // Stable sort keeps walker-discovery order for equal keys
    records.sort_by(|a, b| compare_entries(&a.entry, &b.entry, &params.sort_by));

    let rows: Vec<TaskRow> = records
        .into_iter()
        .filter(|record| {
            let entry = &record.entry;
            if !params.filter_task_paths.is_empty()
                && !params.filter_task_paths.contains(&entry.task_path)
            {
                return false;
            }
            if !params.filter_task_names.is_empty()
                && !params.filter_task_names.contains(&entry.task_name)
            {
                return false;
            }
            if !params.filter_trigger_kinds.is_empty()
                && !entry
                    .triggers
                    .iter()
                    .any(|kind| params.filter_trigger_kinds.contains(kind))
            {
                return false;
            }
            if params.only_hidden && !entry.hidden {
                return false;
            }
            true
        })
        .map(|record| TaskRow {
            raw: if params.include_raw {
                flatten_tree(&record.tree)
            } else {
                BTreeMap::new()
            },
            entry: record.entry,
        })
        .collect();

    let mut columns: Vec<String> = Attribute::ALL
        .iter()
        .map(|attribute| attribute.name().to_string())
        .collect();
    if params.include_raw {
        let raw_columns: BTreeSet<&String> =
            rows.iter().flat_map(|row| row.raw.keys()).collect();
        columns.extend(raw_columns.into_iter().cloned());
    }

    ReportSet { columns, rows }
}

/// Stringified cell value for the table, CSV, line, and HTML formats
pub(crate) fn cell(row: &TaskRow, column: &str) -> String {
    match Attribute::from_name(column) {
        Some(Attribute::TaskPath) => row.entry.task_path.clone(),
        Some(Attribute::TaskName) => row.entry.task_name.clone(),
        Some(Attribute::Enabled) => row.entry.enabled.to_string(),
        Some(Attribute::Hidden) => row.entry.hidden.to_string(),
        Some(Attribute::Triggers) => format!("[{}]", row.entry.triggers.join(", ")),
        Some(Attribute::ExecCommand) => row.entry.exec_command.clone(),
        Some(Attribute::ExecArgs) => row.entry.exec_args.clone(),
        Some(Attribute::ScheduleTime) => row.entry.schedule_time.to_text(),
        None => row.raw.get(column).cloned().unwrap_or_default(),
    }
}

fn compare_entries(a: &TaskEntry, b: &TaskEntry, sort_by: &[Attribute]) -> Ordering {
    for attribute in sort_by {
        let ordering = match attribute {
            Attribute::TaskPath => a.task_path.cmp(&b.task_path),
            Attribute::TaskName => a.task_name.cmp(&b.task_name),
            Attribute::Enabled => a.enabled.cmp(&b.enabled),
            Attribute::Hidden => a.hidden.cmp(&b.hidden),
            Attribute::Triggers => a.triggers.cmp(&b.triggers),
            Attribute::ExecCommand => a.exec_command.cmp(&b.exec_command),
            Attribute::ExecArgs => a.exec_args.cmp(&b.exec_args),
            Attribute::ScheduleTime => {
                a.schedule_time.to_text().cmp(&b.schedule_time.to_text())
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
