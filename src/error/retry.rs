use super::{source::SourceError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (rate limiting)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // 429 - Too Many Requests
            //
            // The source is healthy but throttling us, backoff and request the same page again.
            Self::SourceError(SourceError::RateLimited) => ErrorRetryStrategy::Retry,

            // Other status codes, transport failures and undecodable pages are surfaced
            // immediately, the caller decides whether the pass can continue.
            Self::SourceError(_) => ErrorRetryStrategy::Fail,

            // Store errors - constraint breaches and connection issues are not retried here
            Self::CatalogError(_) => ErrorRetryStrategy::Fail,
            Self::DbErr(_) => ErrorRetryStrategy::Fail,

            // Bad data won't improve by asking again
            Self::DataShape { .. } => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
