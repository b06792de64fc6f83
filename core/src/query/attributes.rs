/**Closed projection set of sortable Task attributes */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attribute {
    TaskPath,
    TaskName,
    Enabled,
    Hidden,
    Triggers,
    ExecCommand,
    ExecArgs,
    ScheduleTime,
}

impl Attribute {
    /// Standard column order for every report format
    pub(crate) const ALL: [Attribute; 8] = [
        Attribute::TaskPath,
        Attribute::TaskName,
        Attribute::Enabled,
        Attribute::Hidden,
        Attribute::Triggers,
        Attribute::ExecCommand,
        Attribute::ExecArgs,
        Attribute::ScheduleTime,
    ];

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Attribute::TaskPath => "task_path",
            Attribute::TaskName => "task_name",
            Attribute::Enabled => "enabled",
            Attribute::Hidden => "hidden",
            Attribute::Triggers => "triggers",
            Attribute::ExecCommand => "exec_command",
            Attribute::ExecArgs => "exec_args",
            Attribute::ScheduleTime => "schedule_time",
        }
    }

    /// Lookup by attribute name. `None` for anything outside the projection set
    pub(crate) fn from_name(name: &str) -> Option<Attribute> {
        Attribute::ALL
            .iter()
            .find(|attribute| attribute.name() == name)
            .copied()
    }
}
