use std::time::Duration;

use super::{api::ApiError, Error};

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry after the flat retry delay (transient failures)
    Retry,
    /// Wait for the server-suggested duration, or twice the retry delay when none was given
    RateLimited(Option<Duration>),
    /// Failed permanently (missing resource, bad configuration)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::ApiError(api_error) => match api_error {
                // 429 - Too Many Requests
                //
                // PokeAPI asks us to slow down, honor its Retry-After header if present.
                ApiError::RateLimited { retry_after, .. } => {
                    ErrorRetryStrategy::RateLimited(*retry_after)
                }

                // 404 - Not Found
                //
                // The resource doesn't exist, asking again won't change that. Species lookups
                // handle this themselves by redirecting to the base species.
                ApiError::NotFound(_) => ErrorRetryStrategy::Fail,

                // 5xx or other unexpected status, the catalog is having a bad moment
                ApiError::UnexpectedStatus { .. } => ErrorRetryStrategy::Retry,

                // Truncated or garbled body, usually resolves on the next request
                ApiError::Malformed { .. } => ErrorRetryStrategy::Retry,
            },

            // Connection issues, timeouts or body read failures - should retry
            Self::ReqwestError(reqwest_error) => {
                if reqwest_error.is_builder() {
                    // Invalid URL, this won't resolve itself
                    ErrorRetryStrategy::Fail
                } else {
                    ErrorRetryStrategy::Retry
                }
            }

            // Already retried to exhaustion
            Self::RetryExhausted { .. } => ErrorRetryStrategy::Fail,

            // Local failures - permanent, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::CacheError(_) => ErrorRetryStrategy::Fail,
            Self::AnalysisError(_) => ErrorRetryStrategy::Fail,
            Self::CsvError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
