use crate::output::error::FormatError;
use log::error;
use std::fs::{remove_file, File};
use std::io::Write;

/// Write rendered report bytes to the destination file, or stdout when no
/// destination was configured
pub(crate) fn write_report(data: &[u8], path: Option<&str>) -> Result<(), FormatError> {
    let path = match path {
        Some(result) => result,
        None => {
            let stdout_result = std::io::stdout().write_all(data);
            if let Err(err) = stdout_result {
                error!("[output] Failed to write report to stdout: {err:?}");
                return Err(FormatError::Output);
            }
            return Ok(());
        }
    };

    let file_result = File::create(path);
    let mut report_file = match file_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Failed to create report file at {path}: {err:?}");
            return Err(FormatError::Output);
        }
    };

    let write_result = report_file.write_all(data);
    if let Err(err) = write_result {
        error!("[output] Failed to write report file at {path}: {err:?}");
        // A partial report must not be left behind
        let _ = remove_file(path);
        return Err(FormatError::Output);
    }

    Ok(())
}
