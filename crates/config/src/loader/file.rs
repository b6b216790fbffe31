//! Tour file reading.

use std::path::Path;

use super::error::ConfigError;
use crate::types::TourFile;

enum Format {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(Format::Json),
        "yaml" | "yml" => Some(Format::Yaml),
        _ => None,
    }
}

/// Read and deserialize a tour file. Does not validate its contents.
pub fn read_tour_file(path: &Path) -> Result<TourFile, ConfigError> {
    let format = detect_format(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match format {
        Format::Json => serde_json::from_str(&raw).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(&raw).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ConfigError::FileParse {
        path: path.to_path_buf(),
        message,
    })
}
