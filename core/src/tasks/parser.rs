use super::error::TaskError;
use super::normalize::normalize_task;
use super::xml::parse_task_xml;
use crate::error::ReportError;
use crate::filesystem::directory::{glob_paths, is_directory};
use common::tasks::TaskEntry;
use common::xml::XmlNode;
use log::{error, info};
use std::path::{Component, Path, PathBuf};

/// One collected Task, the normalized view plus the raw document tree for the
/// optional raw projection
pub(crate) struct TaskRecord {
    pub(crate) entry: TaskEntry,
    pub(crate) tree: XmlNode,
}

/// Walk every file under the task root and parse each one as Task XML. Any
/// unreadable or malformed file aborts the run, silent skipping would let a
/// tampered task definition go unnoticed
pub(crate) fn collect_tasks(root: &str) -> Result<Vec<TaskRecord>, ReportError> {
    if !is_directory(root) {
        error!("[tasks] Task root {root} is not a directory");
        return Err(ReportError::InvalidInput(format!(
            "task root {root} is not a directory"
        )));
    }

    let glob_result = glob_paths(&format!("{root}/**/*"));
    let glob_entries = match glob_result {
        Ok(result) => result,
        Err(err) => {
            error!("[tasks] Could not glob task root {root}: {err:?}");
            return Err(ReportError::InvalidInput(format!(
                "task root {root} could not be walked"
            )));
        }
    };

    let mut records = Vec::new();
    for glob_entry in glob_entries {
        if !glob_entry.is_file {
            continue;
        }

        let tree = match parse_task_xml(&glob_entry.full_path) {
            Ok(result) => result,
            Err(TaskError::ReadXml) => {
                return Err(ReportError::FileUnreadable(glob_entry.full_path));
            }
            Err(_err) => {
                return Err(ReportError::MalformedXml(glob_entry.full_path));
            }
        };

        let task_path = relative_task_path(root, &glob_entry.full_path);
        let entry = normalize_task(&task_path, &glob_entry.filename, &tree);
        records.push(TaskRecord { entry, tree });
    }

    info!("[tasks] Collected {} tasks from {root}", records.len());
    Ok(records)
}

/// Directory component of a task file relative to the root, `.` for files
/// directly in the root. Glob results drop a leading `./`, so both sides are
/// normalized the same way before the root prefix is stripped
fn relative_task_path(root: &str, full_path: &str) -> String {
    let parent = drop_cur_dir(Path::new(full_path).parent().unwrap_or_else(|| Path::new("")));
    let root = drop_cur_dir(Path::new(root));
    let relative = parent.strip_prefix(&root).unwrap_or(&parent);
    if relative.as_os_str().is_empty() {
        String::from(".")
    } else {
        relative.display().to_string()
    }
}

fn drop_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .skip_while(|component| matches!(component, Component::CurDir))
        .collect()
}
