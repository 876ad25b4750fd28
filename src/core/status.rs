//! # Status Loading
//!
//! Reads a status document saved from the server so it can be inspected
//! without network access. The data is kept as an opaque `serde_json::Value`.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde_json::Value;

#[derive(Debug)]
pub enum StatusLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StatusLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLoadError::Io(_) => write!(f, "failed to read status file"),
            StatusLoadError::Parse(_) => write!(f, "status file is not valid JSON"),
        }
    }
}

impl std::error::Error for StatusLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusLoadError::Io(e) => Some(e),
            StatusLoadError::Parse(e) => Some(e),
        }
    }
}

pub fn load_status(path: &Path) -> Result<Value, StatusLoadError> {
    let contents = fs::read_to_string(path).map_err(StatusLoadError::Io)?;
    let status = serde_json::from_str(&contents).map_err(StatusLoadError::Parse)?;
    info!("Loaded status data from {}", path.display());
    Ok(status)
}
