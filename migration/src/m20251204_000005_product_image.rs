use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251204_000003_image::Image, m20251204_000004_product::Product};

static FK_PRODUCT_IMAGES_PRODUCT_ID: &str = "fk-product_images-product_id";
static FK_PRODUCT_IMAGES_IMAGE_ID: &str = "fk-product_images-image_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductImage::Table)
                    .if_not_exists()
                    .col(integer(ProductImage::ProductId))
                    .col(integer(ProductImage::ImageId))
                    .primary_key(
                        Index::create()
                            .col(ProductImage::ProductId)
                            .col(ProductImage::ImageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_IMAGES_PRODUCT_ID)
                            .from(ProductImage::Table, ProductImage::ProductId)
                            .to(Product::Table, Product::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_IMAGES_IMAGE_ID)
                            .from(ProductImage::Table, ProductImage::ImageId)
                            .to(Image::Table, Image::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductImage {
    #[sea_orm(iden = "product_images")]
    Table,
    ProductId,
    ImageId,
}
