use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};

use super::CatalogRepository;
use crate::{error::catalog::CatalogError, model::db::BrandModel};

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogRepository<'a, C> {
    /// Get a brand using its name
    pub async fn find_brand(&self, name: &str) -> Result<Option<BrandModel>, CatalogError> {
        Ok(entity::prelude::Brand::find()
            .filter(entity::brand::Column::Name.eq(name))
            .one(self.db)
            .await?)
    }

    /// Create a brand
    ///
    /// # Errors
    /// - [`CatalogError::ConstraintViolation`] if a brand with the same name exists
    pub async fn add_brand(&self, name: &str) -> Result<BrandModel, CatalogError> {
        let brand = entity::brand::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        brand
            .insert(self.db)
            .await
            .map_err(|err| CatalogError::from_insert(err, "brand", name))
    }

    /// Number of stored brands
    pub async fn count_brands(&self) -> Result<u64, CatalogError> {
        Ok(entity::prelude::Brand::find().count(self.db).await?)
    }
}
