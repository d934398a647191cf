use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, PoisonError,
    },
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Whole-document storage used by the JSON stores. A read returns `None`
/// when the document does not exist yet; a write replaces it entirely.
pub trait DocumentBackend: Send + Sync {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

/// Document kept in a single UTF-8 file. No locking: two processes writing
/// the same path can lose updates.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory document, for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    contents: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl DocumentBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl<B: DocumentBackend + ?Sized> DocumentBackend for std::sync::Arc<B> {
    fn read(&self) -> Result<Option<String>, StorageError> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        (**self).write(contents)
    }
}

/// Decodes the backend's document, or `T::default()` when there is none.
pub fn load_json<T>(backend: &dyn DocumentBackend) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    match backend.read()? {
        Some(contents) => Ok(serde_json::from_str(&contents)?),
        None => Ok(T::default()),
    }
}

/// Writes `value` as indented JSON. Non-ASCII text is kept as-is.
pub fn save_json<T>(backend: &dyn DocumentBackend, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string_pretty(value)?;
    backend.write(&contents)
}
