//! Retry logic with exponential backoff.
//!
//! [`RetryContext`] runs an operation until it succeeds, fails with an error whose
//! [`ErrorRetryStrategy`] is `Fail`, or runs out of retries.

use std::{future::Future, time::Duration};

use tracing::{debug, error, warn};

use crate::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max retries**: 5 (default), so an operation runs at most 6 times
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
#[derive(Clone, Debug)]
pub struct RetryContext {
    /// Retries allowed after the first attempt
    max_retries: u32,
    /// Delay before the first retry, doubled for every retry after it
    initial_backoff: Duration,
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES, Self::DEFAULT_INITIAL_BACKOFF)
    }
}

impl RetryContext {
    pub const DEFAULT_MAX_RETRIES: u32 = 5;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new(max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
        }
    }

    /// Delay before retry number `retry_count` (zero based)
    pub fn backoff(&self, retry_count: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2_u32.saturating_pow(retry_count))
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "page at offset 200")
    /// - `operation` - Produces a fresh attempt each time it is called
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently, or the last error once all retries
    ///   were used
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut retry_count = 0;

        loop {
            debug!(
                "Processing {} (attempt {}/{})",
                description,
                retry_count + 1,
                self.max_retries + 1
            );

            match operation().await {
                Ok(result) => {
                    debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        error!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        if retry_count >= self.max_retries {
                            error!(
                                "Max retries ({}) exceeded for {}: {}",
                                self.max_retries, description, e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff(retry_count);
                        retry_count += 1;

                        warn!(
                            "Retrying {} (retry {}/{}) after {:?}: {}",
                            description, retry_count, self.max_retries, backoff, e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
