use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },
    #[error("Failed to read curation file {path:?}: {reason}")]
    InvalidCuration { path: PathBuf, reason: String },
}
