use std::fmt;

#[derive(Debug)]
pub(crate) enum UtilsError {
    ReadXml,
}

impl std::error::Error for UtilsError {}

impl fmt::Display for UtilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilsError::ReadXml => write!(f, "Failed to read XML file"),
        }
    }
}
