use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{
    error::source::SourceError,
    model::page::{Page, PageRequest, RawRecord},
    source::CatalogSource,
};

static API_KEY_HEADER: &str = "X-API-Key";

/// Product listing query, one page of `first` records after offset `after`.
pub static PRODUCT_LISTING_QUERY: &str = r#"
query ($first: Int!, $after: Int) {
    getProductListing(defaultLanguage: "en", first: $first, after: $after) {
        totalCount
        edges {
            node {
                sku
                title
                description
                longDescription
                brand
                category {
                    ... on object_Category {
                        name
                        parent {
                            ... on object_Category {
                                name
                            }
                        }
                        children {
                            ... on object_Category {
                                name
                            }
                        }
                    }
                }
                depth
                height
                width
                length
                dimensions
                ean
                grossWeight
                netWeight
                ukPrice
                ukStock
                creationDate
                extraImages {
                    image {
                        creationDate
                        filename
                        fullpath
                        mimetype
                        modificationDate
                    }
                }
                defaultImage {
                    creationDate
                    filename
                    fullpath
                    mimetype
                    modificationDate
                }
                children {
                    ... on object_Product {
                        sku
                    }
                }
            }
        }
    }
}
"#;

/// Catalog source backed by the product listing GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphQlCatalogSource {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<ListingData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingData {
    get_product_listing: Option<ProductListing>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductListing {
    total_count: Option<u64>,
    #[serde(default)]
    edges: Vec<ListingEdge>,
}

#[derive(Deserialize)]
struct ListingEdge {
    node: RawRecord,
}

impl GraphQlCatalogSource {
    /// Creates a new instance of [`GraphQlCatalogSource`]
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl CatalogSource for GraphQlCatalogSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, SourceError> {
        debug!(
            "Requesting {} products at offset {}",
            request.page_size, request.offset
        );

        let body = json!({
            "query": PRODUCT_LISTING_QUERY,
            "variables": {
                "first": request.page_size,
                "after": request.offset,
            },
        });

        let response = self
            .client
            .post(&self.api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited);
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let response: GraphQlResponse = response
            .json()
            .await
            .map_err(|err| SourceError::InvalidResponse(err.to_string()))?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(SourceError::InvalidResponse(messages.join("; ")));
        }

        let listing = response
            .data
            .and_then(|data| data.get_product_listing)
            .ok_or_else(|| {
                SourceError::InvalidResponse(
                    "response has no getProductListing payload".to_string(),
                )
            })?;

        Ok(Page {
            total_count: listing.total_count.unwrap_or(0),
            records: listing.edges.into_iter().map(|edge| edge.node).collect(),
        })
    }
}
