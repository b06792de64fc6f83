use common::tasks::ScheduleInfo;
use common::xml::XmlNode;

/// Summarize a `CalendarTrigger` sub-tree. Only one `ScheduleBy<Kind>` element
/// is expected per trigger, the first match wins
pub(crate) fn summarize_calendar(trigger: &XmlNode) -> ScheduleInfo {
    let mut info = ScheduleInfo::default();

    for (name, node) in trigger.children() {
        if !name.starts_with("ScheduleBy") {
            continue;
        }
        info.schedule = Some(name.clone());

        match name.as_str() {
            "ScheduleByDay" => {
                info.day_interval = node.text_at(&["DaysInterval"]).map(String::from);
            }
            "ScheduleByWeek" => {
                if let Some(days) = node.child("DaysOfWeek") {
                    info.days_of_week = Some(child_names(days));
                }
                info.weeks_interval = node.text_at(&["WeeksInterval"]).map(String::from);
            }
            "ScheduleByMonth" => {
                if let Some(days) = node.child("DaysOfMonth") {
                    info.days_of_month = Some(child_names(days));
                }
                if let Some(months) = node.child("Months") {
                    info.months = Some(child_names(months));
                }
            }
            _ => {}
        }
        break;
    }

    info
}

/// Summarize a `TimeTrigger` sub-tree. `Repetition` sub-elements use the
/// PascalCase names from the Task schema (`Duration`, `Interval`,
/// `StopAtDurationEnd`)
pub(crate) fn summarize_time(trigger: &XmlNode) -> ScheduleInfo {
    let mut info = ScheduleInfo {
        execution_limit: trigger.text_at(&["ExecutionTimeLimit"]).map(String::from),
        ..Default::default()
    };

    if let Some(repetition) = trigger.child("Repetition") {
        info.duration = repetition.text_at(&["Duration"]).map(String::from);
        info.interval = repetition.text_at(&["Interval"]).map(String::from);
        info.stop_at_end = repetition.text_at(&["StopAtDurationEnd"]).map(String::from);
    }

    info
}

/// Element names of all children in document order, duplicates preserved
fn child_names(node: &XmlNode) -> Vec<String> {
    node.children().iter().map(|(name, _)| name.clone()).collect()
}
