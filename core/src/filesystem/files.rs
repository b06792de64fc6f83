use super::error::FileSystemError;
use log::error;
use std::{
    fs::{read, read_to_string},
    path::Path,
};

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a whole file into memory
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Read a whole text file into a string
pub(crate) fn read_text_file(path: &str) -> Result<String, FileSystemError> {
    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let data = read_to_string(path);
    match data {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read text file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}
