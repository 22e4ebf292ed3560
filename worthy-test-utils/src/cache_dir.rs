//! Scratch directories for cache file tests.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::error::TestError;

/// A fresh temporary directory, removed again when dropped.
pub struct TestCacheDir {
    dir: TempDir,
}

impl TestCacheDir {
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::Builder::new().prefix("worthy-test-").tempdir()?;

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `file_name` inside the directory
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, TestError> {
        let path = self.path().join(file_name);
        fs::write(&path, contents)?;

        Ok(path)
    }

    /// Parse `file_name` inside the directory as JSON
    pub fn read_json(&self, file_name: &str) -> Result<Value, TestError> {
        let contents = fs::read_to_string(self.path().join(file_name))?;

        Ok(serde_json::from_str(&contents)?)
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.path().join(file_name).exists()
    }
}
