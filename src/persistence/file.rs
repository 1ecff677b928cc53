//! Directory-backed store that survives process restarts.

use super::{HistoryStore, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `HistoryStore` keeping one `<key>.json` file per key in a directory.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so an interrupted write loses at most that write.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn io_error(key: &str, source: std::io::Error) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl HistoryStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(key, e))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|e| Self::io_error(key, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| Self::io_error(key, e))?;

        debug!(key, path = %path.display(), bytes = value.len(), "wrote history file");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(key, e)),
        }
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let usable = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
    if usable {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
