//! Retry logic with rate-limit awareness for catalog fetches.
//!
//! This module provides the `RetryContext` for executing a single logical fetch with automatic
//! retries. It integrates with the error system to determine which errors are retryable, which
//! ones carry a server-suggested wait, and which ones are permanent.

use std::future::Future;

use crate::{
    config::RetryPolicy,
    error::{retry::ErrorRetryStrategy, Error},
};

/// Context for executing fetches with automatic retry logic.
///
/// Every catalog fetch path (listing, details, species, types) goes through the same context, so
/// the attempt loop lives in exactly one place.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Transient failures**: Retried after a flat delay (1 second by default)
/// - **Rate limits**: Wait for the `Retry-After` duration, or twice the delay without one.
///   The wait consumes an attempt so a run stays bounded even under sustained throttling.
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let retry = RetryContext::new(RetryPolicy::default());
///
/// let species = retry
///     .execute_with_retry("species 6", || client.get_species(6))
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetryContext {
    policy: RetryPolicy,
}

impl RetryContext {
    /// Creates a new retry context with the provided policy.
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Executes an operation with automatic retry logic.
    ///
    /// Runs the provided async operation up to `max_attempts` times. Errors are evaluated using
    /// `to_retry_strategy()` to determine if they are retryable or permanent failures.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "species 6")
    /// - `operation` - Async function producing one attempt's result
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error::RetryExhausted)` - Every attempt failed with a retryable error
    /// - `Err(Error)` - Operation failed permanently, the error is returned as-is
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Fetching {} (attempt {}/{})",
                description,
                attempt_count + 1,
                max_attempts
            );

            let error = match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => e,
            };

            let wait = match error.to_retry_strategy() {
                ErrorRetryStrategy::Fail => {
                    tracing::debug!("Permanent error for {}: {}", description, error);
                    return Err(error);
                }
                ErrorRetryStrategy::RateLimited(retry_after) => {
                    let wait = retry_after.unwrap_or(self.policy.delay() * 2);
                    tracing::warn!(
                        "Rate limit hit for {}. Waiting for {:?}...",
                        description,
                        wait
                    );
                    wait
                }
                ErrorRetryStrategy::Retry => self.policy.delay(),
            };

            attempt_count += 1;
            if attempt_count >= max_attempts {
                tracing::error!(
                    "Max attempts ({}) exceeded for {}: {}",
                    max_attempts,
                    description,
                    error
                );
                return Err(Error::RetryExhausted {
                    description: description.to_string(),
                    attempts: attempt_count,
                    source: Box::new(error),
                });
            }

            tracing::warn!(
                "Retrying {} (attempt {}/{}) after {:?}: {}",
                description,
                attempt_count + 1,
                max_attempts,
                wait,
                error
            );

            tokio::time::sleep(wait).await;
        }
    }
}
