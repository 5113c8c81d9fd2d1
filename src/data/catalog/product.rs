use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use super::CatalogRepository;
use crate::{
    error::catalog::CatalogError,
    model::{
        db::{BrandModel, CategoryModel, ProductModel},
        record::NewProduct,
        report::ProductDetails,
    },
};

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogRepository<'a, C> {
    /// Get a product using its SKU
    pub async fn find_product(&self, sku: &str) -> Result<Option<ProductModel>, CatalogError> {
        Ok(entity::prelude::Product::find()
            .filter(entity::product::Column::Sku.eq(sku))
            .one(self.db)
            .await?)
    }

    /// Inserts a product row without any brand, category or image associations
    ///
    /// # Errors
    /// - [`CatalogError::ConstraintViolation`] if a product with the same SKU exists
    pub async fn add_product(&self, product: NewProduct) -> Result<ProductModel, CatalogError> {
        let sku = product.sku.clone();

        let product = entity::product::ActiveModel {
            sku: ActiveValue::Set(product.sku),
            title: ActiveValue::Set(product.title),
            description: ActiveValue::Set(product.description),
            long_description: ActiveValue::Set(product.long_description),
            uk_price: ActiveValue::Set(product.uk_price),
            uk_stock: ActiveValue::Set(product.uk_stock),
            width: ActiveValue::Set(product.width),
            depth: ActiveValue::Set(product.depth),
            height: ActiveValue::Set(product.height),
            length: ActiveValue::Set(product.length),
            dimensions: ActiveValue::Set(product.dimensions),
            ean: ActiveValue::Set(product.ean),
            gross_weight: ActiveValue::Set(product.gross_weight),
            net_weight: ActiveValue::Set(product.net_weight),
            creation_date: ActiveValue::Set(product.creation_date),
            brand_id: ActiveValue::Set(None),
            category_id: ActiveValue::Set(None),
            default_image_id: ActiveValue::Set(None),
            ..Default::default()
        };

        product
            .insert(self.db)
            .await
            .map_err(|err| CatalogError::from_insert(err, "product", sku))
    }

    /// Sets the product's brand, a no-op when it is already that brand
    pub async fn associate_brand(
        &self,
        product: ProductModel,
        brand: &BrandModel,
    ) -> Result<ProductModel, CatalogError> {
        if product.brand_id == Some(brand.id) {
            return Ok(product);
        }

        let mut product: entity::product::ActiveModel = product.into();
        product.brand_id = ActiveValue::Set(Some(brand.id));

        Ok(product.update(self.db).await?)
    }

    /// Sets the product's category, a no-op when it is already that category
    pub async fn associate_category(
        &self,
        product: ProductModel,
        category: &CategoryModel,
    ) -> Result<ProductModel, CatalogError> {
        if product.category_id == Some(category.id) {
            return Ok(product);
        }

        let mut product: entity::product::ActiveModel = product.into();
        product.category_id = ActiveValue::Set(Some(category.id));

        Ok(product.update(self.db).await?)
    }

    /// Get a product and everything linked to it using its SKU
    ///
    /// Used to verify the outcome of a sync pass.
    pub async fn product_details(&self, sku: &str) -> Result<Option<ProductDetails>, CatalogError> {
        let Some(product) = self.find_product(sku).await? else {
            return Ok(None);
        };

        let brand = match product.brand_id {
            Some(brand_id) => entity::prelude::Brand::find_by_id(brand_id).one(self.db).await?,
            None => None,
        };

        let category = match product.category_id {
            Some(category_id) => {
                entity::prelude::Category::find_by_id(category_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        let image_ids: Vec<i32> = entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.eq(product.id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.image_id)
            .collect();

        let images = entity::prelude::Image::find()
            .filter(entity::image::Column::Id.is_in(image_ids))
            .order_by_asc(entity::image::Column::Id)
            .all(self.db)
            .await?;

        let default_image = product
            .default_image_id
            .and_then(|id| images.iter().find(|image| image.id == id).cloned());

        let child_ids: Vec<i32> = entity::prelude::ChildProduct::find()
            .filter(entity::child_product::Column::ParentProductId.eq(product.id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.child_product_id)
            .collect();

        let child_skus = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(child_ids))
            .order_by_asc(entity::product::Column::Sku)
            .all(self.db)
            .await?
            .into_iter()
            .map(|child| child.sku)
            .collect();

        Ok(Some(ProductDetails {
            product,
            brand,
            category,
            images,
            default_image,
            child_skus,
        }))
    }

    /// Number of stored products
    pub async fn count_products(&self) -> Result<u64, CatalogError> {
        Ok(entity::prelude::Product::find().count(self.db).await?)
    }
}
