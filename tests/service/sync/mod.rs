mod abort;
mod rate_limit;
mod record_failures;

use std::time::Duration;

use catalog_sync::{
    error::Error,
    service::{
        catalog::CatalogService,
        fetcher::PaginatedFetcher,
        retry::RetryContext,
        sync::{SyncOptions, SyncService},
    },
    source::GraphQlCatalogSource,
};
use catalog_sync_test_utils::prelude::*;
use serde_json::json;

/// Fetcher against the test's mock server, backing off 1ms on rate limits
fn fetcher(test: &TestContext, page_size: u64) -> PaginatedFetcher<GraphQlCatalogSource> {
    let source = GraphQlCatalogSource::new(test.api_url(), TEST_API_KEY, Duration::from_secs(5))
        .expect("source should build");

    PaginatedFetcher::new(
        source,
        page_size,
        RetryContext::new(5, Duration::from_millis(1)),
    )
}
