use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, TransactionTrait};

use super::CatalogRepository;
use crate::{
    error::catalog::CatalogError,
    model::db::{ChildProductModel, ProductModel},
};

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogRepository<'a, C> {
    /// Get the variant link between a parent and a child product
    pub async fn find_child_product_link(
        &self,
        parent: &ProductModel,
        child: &ProductModel,
    ) -> Result<Option<ChildProductModel>, CatalogError> {
        Ok(
            entity::prelude::ChildProduct::find_by_id((parent.id, child.id))
                .one(self.db)
                .await?,
        )
    }

    /// Records `child` as a variant of `parent`
    ///
    /// Returns `None` when the link already existed.
    pub async fn associate_child_product(
        &self,
        parent: &ProductModel,
        child: &ProductModel,
    ) -> Result<Option<ChildProductModel>, CatalogError> {
        if self.find_child_product_link(parent, child).await?.is_some() {
            return Ok(None);
        }

        let link = entity::child_product::ActiveModel {
            parent_product_id: ActiveValue::Set(parent.id),
            child_product_id: ActiveValue::Set(child.id),
        };

        let link = link.insert(self.db).await.map_err(|err| {
            CatalogError::from_insert(
                err,
                "child product",
                format!("{} > {}", parent.sku, child.sku),
            )
        })?;

        Ok(Some(link))
    }
}
