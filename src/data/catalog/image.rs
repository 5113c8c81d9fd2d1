use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionSession, TransactionTrait,
};

use super::CatalogRepository;
use crate::{
    error::catalog::CatalogError,
    model::{
        db::{ImageModel, ProductImageModel, ProductModel},
        record::ImageRef,
    },
};

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogRepository<'a, C> {
    /// Get an image using its storage path
    ///
    /// Accepts both bare and enveloped descriptors, an empty envelope finds nothing.
    pub async fn find_image(&self, image: &ImageRef) -> Result<Option<ImageModel>, CatalogError> {
        let Some(descriptor) = image.descriptor() else {
            return Ok(None);
        };

        Ok(entity::prelude::Image::find()
            .filter(entity::image::Column::Fullpath.eq(descriptor.fullpath.as_str()))
            .one(self.db)
            .await?)
    }

    /// Create an image
    ///
    /// # Errors
    /// - [`CatalogError::EmptyImageEnvelope`] if the envelope holds no descriptor
    /// - [`CatalogError::ConstraintViolation`] if an image with the same path exists
    pub async fn add_image(&self, image: &ImageRef) -> Result<ImageModel, CatalogError> {
        let descriptor = image.descriptor().ok_or(CatalogError::EmptyImageEnvelope)?;

        let model = entity::image::ActiveModel {
            filename: ActiveValue::Set(descriptor.filename.clone()),
            fullpath: ActiveValue::Set(descriptor.fullpath.clone()),
            mimetype: ActiveValue::Set(descriptor.mimetype.clone()),
            creation_date: ActiveValue::Set(descriptor.creation_date),
            modification_date: ActiveValue::Set(descriptor.modification_date),
            ..Default::default()
        };

        model
            .insert(self.db)
            .await
            .map_err(|err| CatalogError::from_insert(err, "image", descriptor.fullpath.as_str()))
    }

    /// Adds the image to the product's gallery, then, when `is_default` is set, makes it the
    /// product's default image
    ///
    /// Both steps share one transaction. Linking an image that is already in the gallery
    /// is a no-op.
    pub async fn associate_image(
        &self,
        product: ProductModel,
        image: &ImageModel,
        is_default: bool,
    ) -> Result<ProductModel, CatalogError> {
        let txn = self.db.begin().await?;
        let scoped = CatalogRepository::new(&txn);

        scoped.link_image(&product, image).await?;

        let product = if is_default {
            scoped.set_default_image(product, image).await?
        } else {
            product
        };

        txn.commit().await?;

        Ok(product)
    }

    /// Points the product's default image at `image`
    ///
    /// # Errors
    /// - [`CatalogError::InvariantViolation`] if the image is not in the product's gallery,
    ///   the product is left untouched
    pub async fn set_default_image(
        &self,
        product: ProductModel,
        image: &ImageModel,
    ) -> Result<ProductModel, CatalogError> {
        if self.find_image_link(&product, image).await?.is_none() {
            return Err(CatalogError::InvariantViolation {
                product_id: product.id,
                image_id: image.id,
            });
        }

        if product.default_image_id == Some(image.id) {
            return Ok(product);
        }

        let mut product: entity::product::ActiveModel = product.into();
        product.default_image_id = ActiveValue::Set(Some(image.id));

        Ok(product.update(self.db).await?)
    }

    /// Get the gallery link between a product and an image
    pub async fn find_image_link(
        &self,
        product: &ProductModel,
        image: &ImageModel,
    ) -> Result<Option<ProductImageModel>, CatalogError> {
        Ok(
            entity::prelude::ProductImage::find_by_id((product.id, image.id))
                .one(self.db)
                .await?,
        )
    }

    async fn link_image(
        &self,
        product: &ProductModel,
        image: &ImageModel,
    ) -> Result<ProductImageModel, CatalogError> {
        if let Some(existing) = self.find_image_link(product, image).await? {
            return Ok(existing);
        }

        let link = entity::product_image::ActiveModel {
            product_id: ActiveValue::Set(product.id),
            image_id: ActiveValue::Set(image.id),
        };

        link.insert(self.db).await.map_err(|err| {
            CatalogError::from_insert(
                err,
                "product image",
                format!("{} / {}", product.sku, image.fullpath),
            )
        })
    }

    /// Number of stored images
    pub async fn count_images(&self) -> Result<u64, CatalogError> {
        Ok(entity::prelude::Image::find().count(self.db).await?)
    }
}
