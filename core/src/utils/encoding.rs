use crate::filesystem::files::read_file;
use crate::utils::error::UtilsError;
use crate::utils::strings::{extract_utf16_be_string, extract_utf16_string, extract_utf8_string};
use base64::{engine::general_purpose, Engine};
use log::error;

/// Base64 encode data use the STANDARD engine (alphabet along with "+" and "/")
pub(crate) fn base64_encode_standard(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Read an XML file into a string. Scheduled Task XML is typically UTF16 with a
/// byte order mark, but UTF8 files show up too
pub(crate) fn read_xml(path: &str) -> Result<String, UtilsError> {
    let bytes_result = read_file(path);
    let bytes = match bytes_result {
        Ok(result) => result,
        Err(err) => {
            error!("[encoding] Could not read XML file at {path}: {err:?}");
            return Err(UtilsError::ReadXml);
        }
    };

    let utf16_le_bom = [0xff, 0xfe];
    let utf16_be_bom = [0xfe, 0xff];

    let xml_string = if bytes.starts_with(&utf16_le_bom) {
        extract_utf16_string(&bytes[utf16_le_bom.len()..])
    } else if bytes.starts_with(&utf16_be_bom) {
        extract_utf16_be_string(&bytes[utf16_be_bom.len()..])
    } else {
        extract_utf8_string(&bytes)
    };

    Ok(xml_string)
}
