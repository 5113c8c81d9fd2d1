use std::fmt;

use crate::model::db::{BrandModel, CategoryModel, ImageModel, ProductModel};

/// A record that could not be ingested and was rolled back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFailure {
    pub sku: Option<String>,
    pub reason: String,
}

/// Counters for one synchronization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub pages_fetched: u64,
    pub records_seen: u64,
    pub products_added: u64,
    /// Records whose SKU was already present in the catalog
    pub products_skipped: u64,
    pub brands_created: u64,
    pub categories_created: u64,
    pub images_created: u64,
    pub child_links_created: u64,
    /// Variant links whose child SKU never showed up in the catalog
    pub child_links_unresolved: u64,
    pub failures: Vec<RecordFailure>,
}

impl SyncReport {
    pub fn records_failed(&self) -> u64 {
        self.failures.len() as u64
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records seen over {} pages: {} products added, {} skipped, {} failed; \
             {} brands, {} categories, {} images created; {} variant links created, {} unresolved",
            self.records_seen,
            self.pages_fetched,
            self.products_added,
            self.products_skipped,
            self.records_failed(),
            self.brands_created,
            self.categories_created,
            self.images_created,
            self.child_links_created,
            self.child_links_unresolved,
        )
    }
}

/// A product together with everything linked to it, used to verify a sync.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub product: ProductModel,
    pub brand: Option<BrandModel>,
    pub category: Option<CategoryModel>,
    /// Gallery images ordered by id
    pub images: Vec<ImageModel>,
    pub default_image: Option<ImageModel>,
    pub child_skus: Vec<String>,
}

/// Row counts of the catalog's main tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub products: u64,
    pub brands: u64,
    pub categories: u64,
    pub images: u64,
}

impl fmt::Display for CatalogCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} products, {} brands, {} categories, {} images",
            self.products, self.brands, self.categories, self.images
        )
    }
}
