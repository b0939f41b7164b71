//! Load/save of the Stock Store as a JSON object.
//!
//! The byte-level source is abstracted behind [`Storage`] so the store can be
//! persisted to a file in production and to memory in tests.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

use crate::journal::{Severity, emit};
use crate::store::StockStore;

/// File used when no explicit location is configured.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Byte-level read/write boundary for persisted stock.
pub trait Storage {
    /// Read the whole source. `Ok(None)` means it does not exist.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the whole source with `contents`.
    fn write(&self, contents: &str) -> io::Result<()>;

    /// Human-readable location for log messages.
    fn describe(&self) -> String;
}

/// UTF-8 JSON file on local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl Storage for FileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write to a sibling temp file, sync, then rename over the target so a
    /// crash never leaves a truncated file behind.
    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let written = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(contents.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory storage for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<Option<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(contents.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.inner.read().ok()?.clone()
    }
}

impl Storage for InMemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| io::Error::other("in-memory storage lock poisoned"))
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| io::Error::other("in-memory storage lock poisoned"))?;
        *guard = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("error decoding JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Non-failing outcomes of [`load`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds exactly the persisted items.
    Loaded { items: usize },
    /// Nothing was persisted yet; the store was reset to empty.
    NotFound,
}

impl LoadOutcome {
    pub fn is_loaded(self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Replace the contents of `store` with what `storage` holds.
///
/// A decode or read failure leaves `store` unchanged.
pub fn load<S: Storage + ?Sized>(
    store: &mut StockStore,
    storage: &S,
) -> Result<LoadOutcome, PersistenceError> {
    let path = storage.describe();

    let contents = match storage.read() {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            store.replace_all(core::iter::empty());
            emit(
                None,
                Severity::Warning,
                format!("File {path} not found. Starting with empty inventory."),
            );
            return Ok(LoadOutcome::NotFound);
        }
        Err(source) => {
            let err = PersistenceError::Io { path, source };
            emit(None, Severity::Error, format!("Error loading data: {err}"));
            return Err(err);
        }
    };

    let loaded: StockStore = match serde_json::from_str(&contents) {
        Ok(loaded) => loaded,
        Err(source) => {
            let err = PersistenceError::Decode { path, source };
            emit(None, Severity::Error, err.to_string());
            return Err(err);
        }
    };

    let items = loaded.len();
    *store = loaded;
    emit(None, Severity::Info, format!("Data loaded successfully from {path}"));
    Ok(LoadOutcome::Loaded { items })
}

/// Write the whole of `store` to `storage` as 2-space indented JSON.
pub fn save<S: Storage + ?Sized>(store: &StockStore, storage: &S) -> Result<(), PersistenceError> {
    let path = storage.describe();

    let written = serde_json::to_string_pretty(store)
        .map_err(io::Error::from)
        .and_then(|json| storage.write(&json));

    if let Err(source) = written {
        let err = PersistenceError::Io { path, source };
        emit(None, Severity::Error, format!("Error saving data: {err}"));
        return Err(err);
    }

    emit(None, Severity::Info, format!("Data saved successfully to {path}"));
    Ok(())
}
