//! Errors from locating or preparing the data directory.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// The platform reports no local data directory and no override is set.
    #[error("Cannot determine a data directory; set PRONOUNCED_DATA_DIR")]
    NoDataDir,

    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot update {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PathError {
    pub(crate) fn create_dir(path: &std::path::Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::CreateDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn env_file(path: &std::path::Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::EnvFile {
            path: path.to_path_buf(),
            source,
        }
    }
}
