use serde::de::DeserializeOwned;
use std::fs;

use crate::error::Result;

/// Reads `file_path` and deserializes its JSON content into `T`.
///
/// Failures are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON does not match `T`.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed: T = serde_json::from_str(&data)?;

    Ok(parsed)
}
