use std::fmt;

/**
 * Failure kinds surfaced by a report run. Every kind aborts the run,
 * nothing is skipped silently. The payload names the offending path or
 * parameter for the stderr diagnostic
 */
#[derive(Debug)]
pub enum ReportError {
    /**Bad root path, unknown sort attribute, unknown trigger kind, or unknown format */
    InvalidInput(String),
    /**IO failure opening or reading a task file */
    FileUnreadable(String),
    /**Task file could not be parsed or its top element is not `Task` */
    MalformedXml(String),
    /**HTML format selected but the template could not be read */
    TemplateUnreadable(String),
    /**Failure writing the rendered report */
    Output(String),
}

impl std::error::Error for ReportError {}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::InvalidInput(value) => write!(f, "invalid input: {value}"),
            ReportError::FileUnreadable(value) => write!(f, "file unreadable: {value}"),
            ReportError::MalformedXml(value) => write!(f, "malformed XML: {value}"),
            ReportError::TemplateUnreadable(value) => write!(f, "template unreadable: {value}"),
            ReportError::Output(value) => write!(f, "could not write report: {value}"),
        }
    }
}
