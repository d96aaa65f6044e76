//! Database path resolution.
//!
//! Provides the canonical path to the `SQLite` database file.

use std::fs;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Get the path to the database file.
///
/// Returns `<data root>/data/pronounced.db`. The `data/` subdirectory is
/// created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");

    fs::create_dir_all(&data_dir).map_err(PathError::create_dir(&data_dir))?;

    Ok(data_dir.join("pronounced.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_database_path_lives_under_data_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let path = database_path().unwrap();
        assert_eq!(path, temp.path().join("data").join("pronounced.db"));
        assert!(temp.path().join("data").is_dir());
    }
}
