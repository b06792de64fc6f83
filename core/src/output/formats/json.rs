use crate::output::error::FormatError;
use crate::query::engine::ReportSet;
use log::error;

/// Output to `json` format. The whole record set as a single JSON array with
/// canonical field ordering
pub(crate) fn json_format(report: &ReportSet) -> Result<Vec<u8>, FormatError> {
    let serde_result = serde_json::to_vec(&report.rows);
    match serde_result {
        Ok(results) => Ok(results),
        Err(err) => {
            error!("[output] Failed to serialize json report: {err:?}");
            Err(FormatError::Serialize)
        }
    }
}
