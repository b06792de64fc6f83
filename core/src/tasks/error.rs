use std::fmt;

#[derive(Debug)]
pub(crate) enum TaskError {
    ReadXml,
    Parse,
    NotTask,
}

impl std::error::Error for TaskError {}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::ReadXml => write!(f, "Failed to read Task XML file"),
            TaskError::Parse => write!(f, "Failed to parse Task XML data"),
            TaskError::NotTask => write!(f, "XML document root is not a Task element"),
        }
    }
}
