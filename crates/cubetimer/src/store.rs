//! Best-time persistence.
//!
//! The record is a single plain-text file holding the time in seconds as a
//! decimal number (e.g. `42.317`), overwritten on every improvement.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the record inside the home directory.
pub const FILE_NAME: &str = ".best_cube_time.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access best-time file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("best-time file {} holds {content:?}, not a time in seconds", path.display())]
    Parse { path: PathBuf, content: String },
}

/// Storage for the best completed time.
pub trait BestTimeStore {
    /// Returns the stored time, or `None` if nothing has been recorded.
    fn load(&self) -> Result<Option<f64>, StoreError>;

    /// Replaces the stored time.
    fn save(&self, seconds: f64) -> Result<(), StoreError>;
}

impl<T: BestTimeStore + ?Sized> BestTimeStore for &T {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        (**self).load()
    }

    fn save(&self, seconds: f64) -> Result<(), StoreError> {
        (**self).save(seconds)
    }
}

/// Best time kept in a plain-text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.best_cube_time.txt`, or the working directory when no home
    /// directory can be determined.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file empty if it does not exist yet.
    ///
    /// Returns `true` when the file was created.
    pub fn ensure_exists(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        log::info!("created empty best-time file {}", self.path.display());
        Ok(true)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl BestTimeStore for FileStore {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        parse_seconds(&raw).map_err(|()| StoreError::Parse {
            path: self.path.clone(),
            content: raw.trim().to_string(),
        })
    }

    /// Writes a sibling temp file and renames it over the record, so a crash
    /// mid-write leaves the previous record intact.
    fn save(&self, seconds: f64) -> Result<(), StoreError> {
        let tmp = self.temp_path();
        fs::write(&tmp, seconds.to_string()).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            self.io_error(source)
        })?;

        log::debug!("saved best time {seconds} to {}", self.path.display());
        Ok(())
    }
}

/// Empty (or whitespace) content means no record. Anything else must be a
/// finite, non-negative number.
fn parse_seconds(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join(FILE_NAME))
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        assert_eq!(store.load().unwrap(), None);

        // Second call leaves the existing file alone.
        assert!(!store.ensure_exists().unwrap());
    }

    #[test]
    fn ensure_exists_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/deeper").join(FILE_NAME));
        assert!(store.ensure_exists().unwrap());
        assert!(store.path().exists());
    }

    #[test]
    fn ensure_exists_does_not_truncate_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "12.5").unwrap();

        assert!(!store.ensure_exists().unwrap());
        assert_eq!(store.load().unwrap(), Some(12.5));
    }

    #[test]
    fn save_then_load_returns_same_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for v in [5.5, 42.317, 0.001, 1234.56789] {
            store.save(v).unwrap();
            assert_eq!(store.load().unwrap(), Some(v));
        }
    }

    #[test]
    fn save_writes_plain_decimal_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(5.5).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "5.5");
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn load_tolerates_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  42.317\n").unwrap();
        assert_eq!(store.load().unwrap(), Some(42.317));
    }

    #[test]
    fn load_of_absent_file_is_no_record() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn corrupt_content_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        for bad in ["fast", "-1.0", "NaN", "inf", "1.2.3"] {
            fs::write(store.path(), bad).unwrap();
            match store.load() {
                Err(StoreError::Parse { content, .. }) => assert_eq!(content, bad),
                other => panic!("expected parse error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn save_into_missing_directory_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("gone").join(FILE_NAME));
        assert!(matches!(store.save(1.0), Err(StoreError::Io { .. })));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(FileStore::default_path().ends_with(FILE_NAME));
    }
}
