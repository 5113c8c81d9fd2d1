use thiserror::Error;

/// Failures reported by a [`CatalogSource`](crate::source::CatalogSource).
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source asked us to slow down (HTTP 429). The only retryable condition.
    #[error("Catalog source rate limit reached")]
    RateLimited,
    /// The source answered with a non-success status other than rate limiting.
    #[error("Catalog source responded with HTTP status {0}")]
    Status(u16),
    /// The request never completed (connection refused, timeout, TLS, ...).
    #[error("Catalog source transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response could not be decoded or carried GraphQL errors.
    #[error("Invalid catalog source response: {0}")]
    InvalidResponse(String),
}
