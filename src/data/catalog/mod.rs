//! Find-or-create and association primitives over the catalog tables.
//!
//! Operations are grouped per entity kind (products, brands, categories, images,
//! variants) but share one [`CatalogRepository`]. Every operation is a single atomic unit
//! against the store: multi-row operations open their own (nested) transaction, so a
//! failure never leaves a partial write behind.

mod brand;
mod category;
mod image;
mod product;
mod variant;

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, TransactionTrait};

pub struct CatalogRepository<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogRepository<'a, C> {
    /// Creates a new instance of [`CatalogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}
