//! Catalog row insertion utilities.
//!
//! Rows are written straight through the entity layer so tests can arrange state without
//! going through the repository under test. Inserting a natural key that already exists
//! returns the existing row.

use entity::{brand, category, image, product, product_image};
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, fixtures::catalog::CatalogFixtures};

impl<'a> CatalogFixtures<'a> {
    /// Insert a brand with the given name.
    pub async fn insert_mock_brand(&self, name: &str) -> Result<brand::Model, TestError> {
        if let Some(existing) = entity::prelude::Brand::find()
            .filter(brand::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Brand::insert(brand::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a root category with the given name.
    pub async fn insert_mock_category(&self, name: &str) -> Result<category::Model, TestError> {
        if let Some(existing) = entity::prelude::Category::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Category::insert(category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an image stored at `fullpath`.
    pub async fn insert_mock_image(&self, fullpath: &str) -> Result<image::Model, TestError> {
        if let Some(existing) = entity::prelude::Image::find()
            .filter(image::Column::Fullpath.eq(fullpath))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let filename = fullpath.rsplit('/').next().unwrap_or(fullpath);

        Ok(entity::prelude::Image::insert(image::ActiveModel {
            filename: ActiveValue::Set(filename.to_string()),
            fullpath: ActiveValue::Set(fullpath.to_string()),
            mimetype: ActiveValue::Set(Some("image/jpeg".to_string())),
            creation_date: ActiveValue::Set(Some(1764842719)),
            modification_date: ActiveValue::Set(Some(1764842719)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a product with the given SKU and no associations.
    pub async fn insert_mock_product(&self, sku: &str) -> Result<product::Model, TestError> {
        if let Some(existing) = entity::prelude::Product::find()
            .filter(product::Column::Sku.eq(sku))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(entity::prelude::Product::insert(product::ActiveModel {
            sku: ActiveValue::Set(sku.to_string()),
            title: ActiveValue::Set(format!("Product {}", sku)),
            description: ActiveValue::Set(format!("Description of product {}", sku)),
            long_description: ActiveValue::Set(None),
            uk_price: ActiveValue::Set(500.45),
            uk_stock: ActiveValue::Set(325),
            width: ActiveValue::Set(Some(600.0)),
            depth: ActiveValue::Set(Some(500.0)),
            height: ActiveValue::Set(Some(1800.0)),
            length: ActiveValue::Set(None),
            dimensions: ActiveValue::Set(Some("1800x600x500(HxWxD)".to_string())),
            ean: ActiveValue::Set(None),
            gross_weight: ActiveValue::Set(Some(100.34)),
            net_weight: ActiveValue::Set(Some(80.54)),
            creation_date: ActiveValue::Set(1764842719),
            brand_id: ActiveValue::Set(None),
            category_id: ActiveValue::Set(None),
            default_image_id: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Link an image into a product's gallery.
    pub async fn insert_mock_product_image(
        &self,
        product_id: i32,
        image_id: i32,
    ) -> Result<product_image::Model, TestError> {
        if let Some(existing) = entity::prelude::ProductImage::find_by_id((product_id, image_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::ProductImage::insert(product_image::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                image_id: ActiveValue::Set(image_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
