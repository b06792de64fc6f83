use crate::utils::encoding::base64_encode_standard;
use log::warn;

/// Get a UTF16 little-endian string from provided bytes
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let mut utf16_data: Vec<u16> = Vec::new();
    let min_byte_size = 2;
    for wide_char in data.chunks(min_byte_size) {
        if wide_char.len() < min_byte_size {
            // Check for trailing single byte
            if !wide_char.is_empty() && !wide_char.contains(&0) {
                utf16_data.push(wide_char[0] as u16);
            }
            break;
        }

        utf16_data.push(u16::from_le_bytes([wide_char[0], wide_char[1]]));
    }

    let utf16_result = String::from_utf16(&utf16_data);
    match utf16_result {
        Ok(results) => results.trim_end_matches('\0').to_string(),
        Err(err) => {
            warn!("[strings] Failed to get UTF16 string: {err:?}");

            let max_size = 2097152;
            let issue = if data.len() < max_size {
                base64_encode_standard(data)
            } else {
                format!("Binary data size larger than 2MB, size: {}", data.len())
            };
            format!("Failed to get UTF16: {}", issue)
        }
    }
}

/// Get a UTF16 big-endian string by swapping byte pairs first
pub(crate) fn extract_utf16_be_string(data: &[u8]) -> String {
    let mut swapped: Vec<u8> = Vec::with_capacity(data.len());
    let min_byte_size = 2;
    for wide_char in data.chunks(min_byte_size) {
        if wide_char.len() < min_byte_size {
            swapped.push(wide_char[0]);
            break;
        }
        swapped.push(wide_char[1]);
        swapped.push(wide_char[0]);
    }
    extract_utf16_string(&swapped)
}

/// Get a UTF8 string from provided bytes
pub(crate) fn extract_utf8_string(data: &[u8]) -> String {
    let utf8_result = String::from_utf8(data.to_vec());
    match utf8_result {
        Ok(result) => result.trim_end_matches('\0').to_string(),
        Err(err) => {
            warn!("[strings] Failed to get UTF8 string: {err:?}");

            let max_size = 2097152;
            let issue = if data.len() < max_size {
                base64_encode_standard(data)
            } else {
                format!("Binary data size larger than 2MB, size: {}", data.len())
            };
            format!("Failed to get UTF8 string: {}", issue)
        }
    }
}
