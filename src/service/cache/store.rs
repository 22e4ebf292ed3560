//! Persistence for lookup caches.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{cache::CacheError, Error};

/// Storage backend that a cache is loaded from at the start of a run and saved to at the end
pub trait CacheStore<T> {
    /// Load persisted contents.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Stored contents were found and parsed
    /// - `Ok(None)` - Nothing has been stored yet
    /// - `Err(Error)` - Stored contents exist but can't be read or parsed
    fn load(&self) -> Result<Option<T>, Error>;

    /// Replace persisted contents with `value`
    fn save(&self, value: &T) -> Result<(), Error>;
}

/// Stores a cache as a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> CacheStore<T> for JsonFileStore
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<T>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| CacheError::Read {
            path: self.path.clone(),
            source,
        })?;

        let value = serde_json::from_str(&content).map_err(|source| CacheError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(value))
    }

    fn save(&self, value: &T) -> Result<(), Error> {
        let content = serde_json::to_string(value).map_err(|source| CacheError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CacheError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, content).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}
