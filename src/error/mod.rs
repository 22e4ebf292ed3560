//! Error types for the worthy analysis.
//!
//! This module provides the error handling system for the whole run, with specialized error
//! types for each concern (catalog API responses, configuration, cache files, analysis data).
//! All errors use `thiserror` for `Display` and `Error` implementations and convert into the
//! crate-level [`Error`] through `#[from]`, so `?` works across module boundaries.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod retry;

use thiserror::Error;

use crate::error::{analysis::AnalysisError, api::ApiError, cache::CacheError, config::ConfigError};

/// Main error type for the worthy analysis.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type.
///
/// # Error Categories
/// - Catalog API errors (rate limiting, missing resources, unexpected responses)
/// - Configuration errors (invalid options, unreadable curation file)
/// - Cache errors (unreadable or unwritable cache files)
/// - Analysis errors (records inconsistent with the type chart)
/// - Exhausted retries wrapping the last error observed
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid option values or curation data).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog API response error (status codes, rate limiting, malformed bodies).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Lookup cache persistence error.
    #[error(transparent)]
    CacheError(#[from] CacheError),
    /// Record could not be analysed.
    #[error(transparent)]
    AnalysisError(#[from] AnalysisError),
    /// A fetch kept failing with retryable errors until the attempt budget ran out.
    #[error("Failed {description} after {attempts} attempt(s): {source}")]
    RetryExhausted {
        description: String,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// CSV report export error.
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// Report output I/O error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether the catalog reported that the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError(ApiError::NotFound(_)))
    }

    /// Whether a fetch produced no record: the resource is missing or retries ran out.
    pub fn is_unavailable(&self) -> bool {
        self.is_not_found() || matches!(self, Self::RetryExhausted { .. })
    }
}
