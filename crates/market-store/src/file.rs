//! # File Storage Backend
//!
//! One JSON object per scope on disk, mirrored in memory.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set("cartItems", "[...]")                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  entries.insert(..)              ← in-memory map updated first          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write <data_dir>/local.json.tmp ← full object, pretty JSON             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename → <data_dir>/local.json  ← readers never see a partial file     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Open Path
//! A missing file opens as an empty store. A file that cannot be read or is
//! not a JSON object of strings also opens as empty and is logged at `warn`;
//! the next write replaces it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::kv::{KeyValueStore, Scope};

/// File-backed store for one scope.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or prepares to create) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path);

        debug!(path = %path.display(), keys = entries.len(), "Opened file store");

        FileStore { path, entries }
    }

    /// Opens the file for `scope` inside `data_dir`.
    pub fn open_scope(data_dir: &Path, scope: Scope) -> Self {
        Self::open(data_dir.join(scope.file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable store file, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt store file, starting empty");
                BTreeMap::new()
            }
        }
    }

    /// Rewrites the whole file through a temp file and a rename.
    fn persist(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.tmp_path();

        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), keys = self.entries.len(), "Store file written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.entries.clear();
        self.persist()
    }
}
