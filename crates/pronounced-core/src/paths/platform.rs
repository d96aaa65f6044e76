//! Platform-specific path resolution.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "PRONOUNCED_DATA_DIR";

/// Get the root directory for application data (database, config).
///
/// Resolution order:
/// 1. `PRONOUNCED_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/pronounced`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = match env::var(DATA_DIR_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("pronounced"),
    };

    fs::create_dir_all(&root).map_err(PathError::create_dir(&root))?;

    Ok(root)
}
