//! Catalog API response errors.
//!
//! These errors describe responses from PokeAPI that did not yield a usable record. Transport
//! failures (connection refused, timeouts) are reported separately as `reqwest::Error`.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 429 from the catalog.
    ///
    /// `retry_after` is the server-suggested wait parsed from the `Retry-After` header, if the
    /// header was present and held a number of seconds.
    #[error("Rate limited while requesting {url}")]
    RateLimited {
        url: String,
        retry_after: Option<Duration>,
    },
    /// HTTP 404, the resource does not exist.
    ///
    /// Alternate forms routinely have no dedicated species entry, so this is an expected
    /// response for species lookups.
    #[error("Resource not found: {0}")]
    NotFound(String),
    /// Any other non-success status.
    #[error("Unexpected status {status} while requesting {url}")]
    UnexpectedStatus { url: String, status: u16 },
    /// Body was not the JSON shape we expected.
    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
