//! Mock listing endpoint creation.
//!
//! The catalog source POSTs every page request to the API root, so the endpoints are told
//! apart by the `variables.after` offset in the request body.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::TEST_API_KEY, fixtures::catalog::CatalogFixtures};

impl<'a> CatalogFixtures<'a> {
    /// Create a mock listing endpoint for the page starting at `offset`.
    ///
    /// Responds with `total_count` and the given records as the page's edges. The mock
    /// verifies it was called exactly `expected_requests` times.
    pub fn create_listing_endpoint(
        &mut self,
        offset: u64,
        total_count: u64,
        records: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let edges: Vec<Value> = records
            .into_iter()
            .map(|node| json!({ "node": node }))
            .collect();

        let body = json!({
            "data": {
                "getProductListing": {
                    "totalCount": total_count,
                    "edges": edges
                }
            }
        });

        self.setup
            .server
            .mock("POST", "/")
            .match_header("x-api-key", TEST_API_KEY)
            .match_body(Matcher::PartialJson(json!({ "variables": { "after": offset } })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that answers the page at `offset` with HTTP 429 `times` times.
    ///
    /// Must be created before the listing endpoint for the same offset so mockito serves the
    /// rate limited responses first.
    pub fn create_rate_limited_endpoint(&mut self, offset: u64, times: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/")
            .match_header("x-api-key", TEST_API_KEY)
            .match_body(Matcher::PartialJson(json!({ "variables": { "after": offset } })))
            .with_status(429)
            .with_body("Too Many Requests")
            .expect(times)
            .create()
    }
}
