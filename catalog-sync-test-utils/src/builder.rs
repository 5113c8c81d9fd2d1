//! Declarative test builder.
//!
//! Every `with_*` call only queues work. Tables, rows and mock endpoints are created by
//! [`TestBuilder::build`].

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    brands: Vec<String>,
    categories: Vec<String>,
    images: Vec<String>,
    products: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    rate_limited_pages: Vec<(u64, usize)>, // (offset, times)
    // (offset, total_count, records, expected_requests)
    listing_pages: Vec<(u64, u64, Vec<Value>, usize)>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            brands: Vec::new(),
            categories: Vec::new(),
            images: Vec::new(),
            products: Vec::new(),
            mock_builders: Vec::new(),
            rate_limited_pages: Vec::new(),
            listing_pages: Vec::new(),
        }
    }

    /// Create every catalog table: products, brands, categories, images and the
    /// association tables between them.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Create the table for a single entity.
    pub fn with_table<E>(mut self, entity: E) -> Self
    where
        E: EntityTrait,
    {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a brand row. Requires the brand table.
    pub fn with_mock_brand(mut self, name: impl Into<String>) -> Self {
        self.brands.push(name.into());
        self
    }

    /// Insert a root category row. Requires the category table.
    pub fn with_mock_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Insert an image row stored at `fullpath`. Requires the image table.
    pub fn with_mock_image(mut self, fullpath: impl Into<String>) -> Self {
        self.images.push(fullpath.into());
        self
    }

    /// Insert a product row without associations. Requires the product table.
    pub fn with_mock_product(mut self, sku: impl Into<String>) -> Self {
        self.products.push(sku.into());
        self
    }

    /// Serve one listing page starting at `offset`.
    ///
    /// # Arguments
    /// - `offset` - Value of `variables.after` the request must carry
    /// - `total_count` - Total the page reports for the whole listing
    /// - `records` - Records returned as the page's edges
    /// - `expected_requests` - Number of times this page should be requested
    pub fn with_listing_page(
        mut self,
        offset: u64,
        total_count: u64,
        records: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.listing_pages
            .push((offset, total_count, records, expected_requests));
        self
    }

    /// Answer the page at `offset` with HTTP 429 `times` times before any listing page
    /// registered for the same offset is served.
    pub fn with_rate_limited_page(mut self, offset: u64, times: usize) -> Self {
        self.rate_limited_pages.push((offset, times));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog tables if requested, then custom tables)
    /// 2. Inserts database fixtures
    /// 3. Creates mock endpoints (custom, then rate limited, then listing pages)
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Brand),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::Image),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::ProductImage),
                schema.create_table_from_entity(entity::prelude::ChildCategory),
                schema.create_table_from_entity(entity::prelude::ChildProduct),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.brands {
            setup.catalog().insert_mock_brand(&name).await?;
        }

        for name in self.categories {
            setup.catalog().insert_mock_category(&name).await?;
        }

        for fullpath in self.images {
            setup.catalog().insert_mock_image(&fullpath).await?;
        }

        for sku in self.products {
            setup.catalog().insert_mock_product(&sku).await?;
        }

        // 3. Create mock endpoints
        // mockito serves the first matching mock that still expects hits, so the
        // error responses for an offset have to exist before its success response.
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (offset, times) in self.rate_limited_pages {
            mocks.push(setup.catalog().create_rate_limited_endpoint(offset, times));
        }

        for (offset, total_count, records, expected) in self.listing_pages {
            mocks.push(setup.catalog().create_listing_endpoint(
                offset,
                total_count,
                records,
                expected,
            ));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
