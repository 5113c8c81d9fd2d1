use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::CatalogRepository,
    error::Error,
    model::report::{CatalogCounts, ProductDetails},
};

/// Read-only view of the catalog, used to verify the outcome of a pass.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a product and its brand, category, images and variants using its SKU
    pub async fn product_details(&self, sku: &str) -> Result<Option<ProductDetails>, Error> {
        let repo = CatalogRepository::new(self.db);

        Ok(repo.product_details(sku).await?)
    }

    pub async fn counts(&self) -> Result<CatalogCounts, Error> {
        let repo = CatalogRepository::new(self.db);

        Ok(CatalogCounts {
            products: repo.count_products().await?,
            brands: repo.count_brands().await?,
            categories: repo.count_categories().await?,
            images: repo.count_images().await?,
        })
    }
}
