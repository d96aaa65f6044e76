//! Resolved path snapshot for CLI introspection.

use std::fmt;
use std::path::PathBuf;

use super::{PathError, data_root, database_path, env_file_path};

/// All resolved paths captured in a single struct.
///
/// Backs the `pronounced paths` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file
    pub database_path: PathBuf,
    /// Path to the `.env` overrides file
    pub env_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database_path: database_path()?,
            env_file: env_file_path()?,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data root:  {}", self.data_root.display())?;
        writeln!(f, "Database:   {}", self.database_path.display())?;
        write!(f, "Env file:   {}", self.env_file.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_resolve_is_consistent() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let paths = ResolvedPaths::resolve().unwrap();
        assert!(paths.database_path.starts_with(&paths.data_root));
        assert_eq!(paths.env_file, paths.data_root.join(".env"));
        assert!(paths.to_string().contains("pronounced.db"));
    }
}
