//! Error types for the catalog synchronizer.
//!
//! Each concern (configuration, remote source, catalog persistence) carries its own
//! `thiserror` enum, and all of them fold into the top-level [`Error`] through `#[from]`
//! so the `?` operator can be used across layers. [`retry`] derives a retry strategy
//! from an [`Error`], which is what the paginated fetcher consults before backing off.

pub mod catalog;
pub mod config;
pub mod retry;
pub mod source;
pub mod sync;

use thiserror::Error;

use crate::error::{catalog::CatalogError, config::ConfigError, source::SourceError};

/// Main error type for the catalog synchronizer.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Remote source errors (rate limiting, transport, malformed pages)
/// - Catalog errors (constraint and invariant violations)
/// - Malformed product records
/// - Database errors outside of catalog operations (connections, transactions)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote catalog source error.
    #[error(transparent)]
    SourceError(#[from] SourceError),
    /// Catalog repository error.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// A fetched record lacks a field, or has a field of the wrong shape.
    #[error("Malformed product record {}: {reason}", .sku.as_deref().unwrap_or("<unknown sku>"))]
    DataShape {
        sku: Option<String>,
        reason: String,
    },
    /// Database error (connection, transaction begin/commit).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Whether the error only concerns the record being ingested.
    ///
    /// Record-scoped errors are rolled back and reported, and the pass moves on to the
    /// next record. Anything else means the store or the source can no longer be trusted
    /// for this pass.
    pub fn is_record_scoped(&self) -> bool {
        match self {
            Self::DataShape { .. } => true,
            Self::CatalogError(err) => err.is_record_scoped(),
            _ => false,
        }
    }
}
