//! Durable key-value storage for small string settings.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

/// Errors raised by a [`Storage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error on {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The backing file does not hold a JSON object of strings.
    #[error("malformed storage file {}: {source}", .path.display())]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
    /// No per-user configuration directory could be determined.
    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

/// String key-value storage.
pub trait Storage {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Storage that lives for the duration of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage backed by a JSON object file. The file is read on every access
/// and rewritten on every change.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the file at `path`. It does not have to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `storage.json` in the per-user configuration directory.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        let dirs = ProjectDirs::from("dev", "swatch", "swatch").ok_or(StorageError::NoConfigDir)?;
        Ok(dirs.config_dir().join("storage.json"))
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.load()?.remove(key);
        log::debug!("Read {key:?} from {}: {value:?}", self.path.display());
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        values.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let content = serde_json::to_string_pretty(&values).map_err(|source| {
            StorageError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, content).map_err(|err| self.io_error(err))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn memory_storage_get_and_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("storage.json"));
        assert_eq!(storage.get("theme").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        let mut storage = FileStorage::new(&path);
        storage.set("theme", "dark").unwrap();
        storage.set("other", "value").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::new(&path);
        assert!(matches!(storage.get("theme"), Err(StorageError::Parse { .. })));
        assert!(matches!(
            storage.set("theme", "dark"),
            Err(StorageError::Parse { .. })
        ));
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        assert!(matches!(storage.get("theme"), Err(StorageError::Io { .. })));
    }
}
