use std::path::PathBuf;

use thiserror::Error;

/// Lookup cache persistence errors.
///
/// A cache file that exists but cannot be read or parsed is unrecoverable: it is reported before
/// the analysis starts rather than silently discarding the cached data.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to read cache file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cache file {path:?} is not valid JSON for its cache: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write cache file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize cache for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
