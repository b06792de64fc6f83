use serde::Serialize;

/**
 * Normalized view of one Scheduled Task XML file.
 * Schema at: [Task XML](https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-tsch/0d6383e4-de92-43e7-b0bb-a60cfa36379f)
 */
#[derive(Debug, Clone, Serialize)]
pub struct TaskEntry {
    /**Directory component relative to the task root, `.` for the root itself */
    pub task_path: String,
    /**Basename of the task XML file */
    pub task_name: String,
    pub enabled: bool,
    pub hidden: bool,
    /**Enabled trigger kind names in document order, one entry per kind */
    pub triggers: Vec<String>,
    pub exec_command: String,
    pub exec_args: String,
    pub schedule_time: ScheduleTime,
}

/**
 * Compact schedule descriptor for a task. Tasks with no enabled calendar
 * or time trigger report the literal string `N/A`, kept for compatibility
 * with existing consumers of the report output
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScheduleTime {
    NotAvailable(String),
    Info(ScheduleInfo),
}

impl ScheduleTime {
    pub fn not_available() -> ScheduleTime {
        ScheduleTime::NotAvailable(String::from("N/A"))
    }

    /// Canonical single-line text form, used for sorting and CSV/table cells
    pub fn to_text(&self) -> String {
        match self {
            ScheduleTime::NotAvailable(value) => value.clone(),
            ScheduleTime::Info(info) => serde_json::to_string(info).unwrap_or_default(),
        }
    }
}

/**
 * Summarized trigger timing. Field declaration order is the canonical
 * serialization order. Absent source elements stay absent in the output,
 * they are never serialized as null
 */
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(rename = "dayInterval", skip_serializing_if = "Option::is_none")]
    pub day_interval: Option<String>,
    #[serde(rename = "daysOfWeek", skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<String>>,
    #[serde(rename = "weeksInterval", skip_serializing_if = "Option::is_none")]
    pub weeks_interval: Option<String>,
    #[serde(rename = "daysOfMonth", skip_serializing_if = "Option::is_none")]
    pub days_of_month: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<String>>,
    #[serde(rename = "executionLimit", skip_serializing_if = "Option::is_none")]
    pub execution_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(rename = "stopAtEnd", skip_serializing_if = "Option::is_none")]
    pub stop_at_end: Option<String>,
}

impl ScheduleInfo {
    pub fn is_empty(&self) -> bool {
        self == &ScheduleInfo::default()
    }
}

/**Closed set of trigger kinds tracked in a `TaskEntry` */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Event,
    Time,
    Logon,
    Boot,
    Calendar,
    SessionStateChange,
    Registration,
}

impl TriggerKind {
    pub const ALL: [TriggerKind; 7] = [
        TriggerKind::Event,
        TriggerKind::Time,
        TriggerKind::Logon,
        TriggerKind::Boot,
        TriggerKind::Calendar,
        TriggerKind::SessionStateChange,
        TriggerKind::Registration,
    ];

    /// Element name as it appears under `Triggers`
    pub fn name(&self) -> &'static str {
        match self {
            TriggerKind::Event => "EventTrigger",
            TriggerKind::Time => "TimeTrigger",
            TriggerKind::Logon => "LogonTrigger",
            TriggerKind::Boot => "BootTrigger",
            TriggerKind::Calendar => "CalendarTrigger",
            TriggerKind::SessionStateChange => "SessionStateChangeTrigger",
            TriggerKind::Registration => "RegistrationTrigger",
        }
    }

    /// Lookup by element name. `None` for anything outside the closed set
    pub fn from_name(name: &str) -> Option<TriggerKind> {
        TriggerKind::ALL.iter().find(|kind| kind.name() == name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{ScheduleInfo, ScheduleTime, TriggerKind};

    #[test]
    fn test_trigger_kind_from_name() {
        assert_eq!(
            TriggerKind::from_name("SessionStateChangeTrigger").unwrap(),
            TriggerKind::SessionStateChange
        );
        assert!(TriggerKind::from_name("IdleTrigger").is_none());
    }

    #[test]
    fn test_schedule_time_not_available() {
        let schedule = ScheduleTime::not_available();
        assert_eq!(schedule.to_text(), "N/A");
        assert_eq!(serde_json::to_string(&schedule).unwrap(), "\"N/A\"");
    }

    #[test]
    fn test_schedule_info_field_order() {
        let info = ScheduleInfo {
            schedule: Some(String::from("ScheduleByWeek")),
            days_of_week: Some(vec![String::from("Monday"), String::from("Friday")]),
            weeks_interval: Some(String::from("2")),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            "{\"schedule\":\"ScheduleByWeek\",\"daysOfWeek\":[\"Monday\",\"Friday\"],\"weeksInterval\":\"2\"}"
        );
    }

    #[test]
    fn test_schedule_info_omits_absent_fields() {
        let info = ScheduleInfo {
            duration: Some(String::from("PT1H")),
            interval: Some(String::from("PT5M")),
            stop_at_end: Some(String::from("true")),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            "{\"duration\":\"PT1H\",\"interval\":\"PT5M\",\"stopAtEnd\":\"true\"}"
        );
        assert!(!info.is_empty());
        assert!(ScheduleInfo::default().is_empty());
    }
}
