use std::fs;
use std::path::Path;
use tracing::debug;

use crate::discovery::LocateOptions;
use crate::error::ConfigError;

/// Loads discovery options from a `.json`, `.yaml` or `.yml` file.
pub fn load_locate_options<P: AsRef<Path>>(path: P) -> Result<LocateOptions, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading discovery config");

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !matches!(extension, "json" | "yaml" | "yml") {
        return Err(ConfigError::unsupported_format(extension));
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

    match extension {
        "json" => {
            serde_json::from_str(&content).map_err(|e| ConfigError::parse_error(path, e.to_string()))
        }
        _ => {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::parse_error(path, e.to_string()))
        }
    }
}
