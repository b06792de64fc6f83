use std::fmt;

#[derive(Debug)]
pub(crate) enum FormatError {
    Serialize,
    Output,
}

impl std::error::Error for FormatError {}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Serialize => write!(f, "Failed to serialize report data"),
            FormatError::Output => write!(f, "Failed to write report data"),
        }
    }
}
