use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Reads the file at `path` and parses its JSON content into `T`.
///
/// Io and serde failures are converted into the crate's `Error` variants.
pub fn parse_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(path)?;
    let parsed = serde_json::from_str(&data)?;
    Ok(parsed)
}
