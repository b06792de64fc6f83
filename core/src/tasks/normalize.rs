use super::schedule::{summarize_calendar, summarize_time};
use common::tasks::{ScheduleTime, TaskEntry, TriggerKind};
use common::xml::XmlNode;
use log::warn;

/// Derive the normalized view of one Task from its raw document tree
pub(crate) fn normalize_task(task_path: &str, task_name: &str, tree: &XmlNode) -> TaskEntry {
    TaskEntry {
        task_path: task_path.to_string(),
        task_name: task_name.to_string(),
        enabled: setting_is_true(tree, "Enabled"),
        hidden: setting_is_true(tree, "Hidden"),
        triggers: enabled_triggers(task_path, task_name, tree),
        exec_command: tree
            .text_at(&["Actions", "Exec", "Command"])
            .unwrap_or_default()
            .to_string(),
        exec_args: tree
            .text_at(&["Actions", "Exec", "Arguments"])
            .unwrap_or_default()
            .to_string(),
        schedule_time: schedule_time(tree),
    }
}

/// A Settings flag counts as set only when its text is exactly `true`
fn setting_is_true(tree: &XmlNode, name: &str) -> bool {
    tree.text_at(&["Settings", name]) == Some("true")
}

/// Names of the enabled triggers in document order. Kinds outside the tracked
/// set are logged and skipped
fn enabled_triggers(task_path: &str, task_name: &str, tree: &XmlNode) -> Vec<String> {
    let triggers = match tree.child("Triggers") {
        Some(result) => result,
        None => return Vec::new(),
    };

    if triggers.children().is_empty() {
        warn!("[tasks] Task {task_path}/{task_name} has an empty Triggers element");
        return Vec::new();
    }

    let mut names = Vec::new();
    for (name, node) in triggers.children() {
        if TriggerKind::from_name(name).is_none() {
            warn!("[tasks] Task {task_path}/{task_name} has unknown trigger kind {name}");
            continue;
        }
        if trigger_enabled(node) {
            names.push(name.clone());
        }
    }
    names
}

/// A trigger is enabled when its subtree is empty, it has no `Enabled` child,
/// or the `Enabled` text is `true`
fn trigger_enabled(trigger: &XmlNode) -> bool {
    match trigger.child("Enabled") {
        Some(node) => node.text() == Some("true"),
        None => true,
    }
}

/// Compact schedule descriptor for the task. Calendar triggers take precedence
/// over time triggers, everything else yields `N/A`
fn schedule_time(tree: &XmlNode) -> ScheduleTime {
    let triggers = match tree.child("Triggers") {
        Some(result) => result,
        None => return ScheduleTime::not_available(),
    };

    let mut summary = None;
    for (name, node) in triggers.children() {
        if name == TriggerKind::Calendar.name() && trigger_enabled(node) {
            summary = Some(summarize_calendar(node));
            break;
        }
    }
    if summary.is_none() {
        for (name, node) in triggers.children() {
            if name == TriggerKind::Time.name() && trigger_enabled(node) {
                summary = Some(summarize_time(node));
                break;
            }
        }
    }

    match summary {
        // A trigger that carries no scheduling fields reports N/A the same as
        // no trigger at all
        Some(info) if !info.is_empty() => ScheduleTime::Info(info),
        _ => ScheduleTime::not_available(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_task;
    use crate::tasks::xml::process_xml;
    use common::tasks::ScheduleTime;

    #[test]
    fn test_normalize_task() {
        let xml = r"<Task>
          <Settings><Enabled>true</Enabled></Settings>
          <Triggers>
            <CalendarTrigger><ScheduleByDay><DaysInterval>1</DaysInterval></ScheduleByDay></CalendarTrigger>
          </Triggers>
          <Actions><Exec><Command>%windir%\System32\defrag.exe</Command></Exec></Actions>
        </Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task("Microsoft/Windows/Defrag", "ScheduledDefrag", &tree);

        assert!(entry.enabled);
        assert!(!entry.hidden);
        assert_eq!(entry.triggers, vec!["CalendarTrigger"]);
        assert_eq!(entry.exec_command, "%windir%\\System32\\defrag.exe");
        assert_eq!(entry.exec_args, "");
        assert_eq!(
            entry.schedule_time.to_text(),
            "{\"schedule\":\"ScheduleByDay\",\"dayInterval\":\"1\"}"
        );
    }

    #[test]
    fn test_normalize_task_hidden_disabled() {
        let xml = "<Task><Settings><Enabled>false</Enabled><Hidden>true</Hidden></Settings></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task(".", "Stealthy", &tree);

        assert!(!entry.enabled);
        assert!(entry.hidden);
        assert!(entry.triggers.is_empty());
        assert_eq!(entry.schedule_time, ScheduleTime::not_available());
    }

    #[test]
    fn test_normalize_task_disabled_trigger_skipped() {
        let xml = "<Task><Triggers>
            <LogonTrigger><Enabled>false</Enabled></LogonTrigger>
            <BootTrigger/>
          </Triggers></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task(".", "Boot", &tree);

        assert_eq!(entry.triggers, vec!["BootTrigger"]);
        assert_eq!(entry.schedule_time, ScheduleTime::not_available());
    }

    #[test]
    fn test_normalize_task_calendar_precedence() {
        let xml = "<Task><Triggers>
            <TimeTrigger><Repetition><Interval>PT5M</Interval></Repetition></TimeTrigger>
            <CalendarTrigger><ScheduleByDay><DaysInterval>2</DaysInterval></ScheduleByDay></CalendarTrigger>
          </Triggers></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task(".", "Both", &tree);

        assert_eq!(
            entry.schedule_time.to_text(),
            "{\"schedule\":\"ScheduleByDay\",\"dayInterval\":\"2\"}"
        );
    }

    #[test]
    fn test_normalize_task_unknown_trigger_kind() {
        let xml = "<Task><Triggers><IdleTrigger/><TimeTrigger/></Triggers></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task(".", "Idle", &tree);

        assert_eq!(entry.triggers, vec!["TimeTrigger"]);
    }

    #[test]
    fn test_normalize_task_time_trigger_without_schedule() {
        let xml = "<Task><Triggers>
            <TimeTrigger><StartBoundary>2023-01-01T08:00:00</StartBoundary></TimeTrigger>
          </Triggers></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task(".", "OnlyStart", &tree);

        assert_eq!(entry.triggers, vec!["TimeTrigger"]);
        assert_eq!(entry.schedule_time, ScheduleTime::not_available());
        assert_eq!(entry.schedule_time.to_text(), "N/A");
    }

    #[test]
    fn test_normalize_task_empty_triggers() {
        let xml = "<Task><Triggers></Triggers></Task>";
        let tree = process_xml(xml, "test").unwrap();
        let entry = normalize_task(".", "Empty", &tree);

        assert!(entry.triggers.is_empty());
        assert_eq!(entry.schedule_time, ScheduleTime::not_available());
    }
}
