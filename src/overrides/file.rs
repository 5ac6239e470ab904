//! JSON-file-backed override store.
//!
//! Persists the whole mapping as one JSON object under a configurable path
//! (default: `$XDG_DATA_HOME/finledger-rs/category_overrides.json`). The
//! mapping is small (one entry per re-categorized purchase), so every
//! operation reads and rewrites the file under an in-process mutex.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{FinLedgerError, Result};
use crate::models::PurchaseId;

use super::CategoryOverrides;

/// Application name used for the XDG data directory.
const APP_NAME: &str = "finledger-rs";

/// File name holding the override mapping.
const OVERRIDES_FILE: &str = "category_overrides.json";

/// File-backed override store persisting one JSON object.
#[derive(Debug)]
pub struct FileOverrides {
    /// Full path of the JSON file.
    path: PathBuf,
    /// Mutex serializing concurrent in-process access.
    lock: Mutex<()>,
}

impl FileOverrides {
    /// Creates a file store at the given path, creating parent directories
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    #[inline]
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(store_io_error)?;
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Returns the default XDG-compliant path for the overrides file.
    ///
    /// On Linux: `$XDG_DATA_HOME/finledger-rs/category_overrides.json`
    /// (typically under `~/.local/share`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined.
    #[inline]
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME).join(OVERRIDES_FILE))
            .ok_or_else(|| {
                FinLedgerError::Store("could not determine platform data directory".into())
            })
    }

    /// Returns the path of the backing file.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current mapping; a missing file is an empty mapping.
    fn load(&self) -> Result<HashMap<PurchaseId, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(store_io_error)?;
        serde_json::from_str(&raw).map_err(FinLedgerError::from)
    }

    /// Rewrites the backing file with the given mapping.
    fn save(&self, map: &HashMap<PurchaseId, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, raw).map_err(store_io_error)
    }

    /// Acquires the file lock and applies a closure to the loaded mapping,
    /// saving it back when the closure reports a change.
    fn with_file<R>(&self, f: impl FnOnce(&mut HashMap<PurchaseId, String>) -> (R, bool)) -> Result<R> {
        let _guard = self
            .lock
            .lock()
            .map_err(|err| FinLedgerError::Store(err.to_string().into()))?;
        let mut map = self.load()?;
        let (result, dirty) = f(&mut map);
        if dirty {
            self.save(&map)?;
        }
        Ok(result)
    }
}

/// Wraps an I/O error from the backing file.
fn store_io_error(err: std::io::Error) -> FinLedgerError {
    FinLedgerError::Store(Box::new(err))
}

impl CategoryOverrides for FileOverrides {
    #[inline]
    fn get(&self, id: &PurchaseId) -> Result<Option<String>> {
        self.with_file(|map| (map.get(id).cloned(), false))
    }

    #[inline]
    fn set(&self, id: &PurchaseId, category: &str) -> Result<()> {
        self.with_file(|map| {
            let _prev = map.insert(id.clone(), category.to_owned());
            ((), true)
        })
    }

    #[inline]
    fn remove(&self, id: &PurchaseId) -> Result<()> {
        self.with_file(|map| {
            let _prev = map.remove(id);
            ((), true)
        })
    }

    #[inline]
    fn all(&self) -> Result<HashMap<PurchaseId, String>> {
        self.with_file(|map| (map.clone(), false))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_file(|map| {
            map.clear();
            ((), true)
        })
    }
}
