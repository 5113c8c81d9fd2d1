//! Remote catalog sources.
//!
//! A [`CatalogSource`] answers one page request at a time. It knows nothing about
//! pagination state or retries, which live in the
//! [`PaginatedFetcher`](crate::service::fetcher::PaginatedFetcher).

pub mod graphql;

use std::future::Future;

use crate::{
    error::source::SourceError,
    model::page::{Page, PageRequest},
};

pub use graphql::GraphQlCatalogSource;

/// Paginated, read-only feed of product records.
///
/// Implementations must report rate limiting as [`SourceError::RateLimited`] and
/// nothing else, as that is the only condition the fetcher backs off on.
pub trait CatalogSource {
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<Page, SourceError>> + Send;
}
