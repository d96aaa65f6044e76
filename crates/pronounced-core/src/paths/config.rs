//! The `.env` file in the data root.
//!
//! Holds secrets such as `GEMINI_API_KEY` so they survive between runs
//! without living in the settings table.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}

/// Set `key=value` in the `.env` file, creating the file when missing.
///
/// Other lines, comments included, are kept as they are.
pub fn persist_env_value(key: &str, value: &str) -> Result<(), PathError> {
    let path = env_file_path()?;
    let existing = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(PathError::env_file(&path)(e)),
    };

    let mut contents = upsert_line(&existing, key, value).join("\n");
    contents.push('\n');
    fs::write(&path, contents).map_err(PathError::env_file(&path))
}

/// Replace the first `key=` line and drop later duplicates, or append one.
fn upsert_line(contents: &str, key: &str, value: &str) -> Vec<String> {
    let entry = format!("{key}={value}");
    let mut seen = false;
    let mut lines: Vec<String> = contents
        .lines()
        .filter_map(|line| {
            let is_key = line.split_once('=').is_some_and(|(k, _)| k.trim() == key);
            match (is_key, seen) {
                (false, _) => Some(line.to_string()),
                (true, false) => {
                    seen = true;
                    Some(entry.clone())
                }
                (true, true) => None,
            }
        })
        .collect();
    if !seen {
        lines.push(entry);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::DATA_DIR_ENV;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_persist_env_value_writes_and_replaces() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        fs::write(temp.path().join(".env"), "# keys\nOTHER=1\nGEMINI_API_KEY=old\n").unwrap();
        persist_env_value("GEMINI_API_KEY", "new").unwrap();

        let contents = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert_eq!(contents, "# keys\nOTHER=1\nGEMINI_API_KEY=new\n");
    }

    #[test]
    fn test_persist_env_value_creates_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        persist_env_value("GEMINI_API_KEY", "abc").unwrap();
        let contents = fs::read_to_string(env_file_path().unwrap()).unwrap();
        assert_eq!(contents, "GEMINI_API_KEY=abc\n");
    }

    #[test]
    fn test_replace_drops_duplicate_keys() {
        assert_eq!(upsert_line("K=1\nK=2", "K", "3"), ["K=3"]);
        assert_eq!(upsert_line("", "K", "3"), ["K=3"]);
    }
}
