use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251204_000001_brand::Brand, m20251204_000002_category::Category,
    m20251204_000003_image::Image,
};

static FK_PRODUCTS_BRAND_ID: &str = "fk-products-brand_id";
static FK_PRODUCTS_CATEGORY_ID: &str = "fk-products-category_id";
static FK_PRODUCTS_DEFAULT_IMAGE_ID: &str = "fk-products-default_image_id";
static IDX_PRODUCTS_BRAND_ID: &str = "idx-products-brand_id";
static IDX_PRODUCTS_CATEGORY_ID: &str = "idx-products-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_uniq(Product::Sku))
                    .col(string(Product::Title))
                    .col(text(Product::Description))
                    .col(text_null(Product::LongDescription))
                    .col(double(Product::UkPrice))
                    .col(integer(Product::UkStock))
                    .col(double_null(Product::Width))
                    .col(double_null(Product::Depth))
                    .col(double_null(Product::Height))
                    .col(double_null(Product::Length))
                    .col(string_null(Product::Dimensions))
                    .col(string_null(Product::Ean))
                    .col(double_null(Product::GrossWeight))
                    .col(double_null(Product::NetWeight))
                    .col(big_integer(Product::CreationDate))
                    .col(integer_null(Product::BrandId))
                    .col(integer_null(Product::CategoryId))
                    .col(integer_null(Product::DefaultImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCTS_BRAND_ID)
                            .from(Product::Table, Product::BrandId)
                            .to(Brand::Table, Brand::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCTS_CATEGORY_ID)
                            .from(Product::Table, Product::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCTS_DEFAULT_IMAGE_ID)
                            .from(Product::Table, Product::DefaultImageId)
                            .to(Image::Table, Image::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCTS_BRAND_ID)
                    .table(Product::Table)
                    .col(Product::BrandId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCTS_CATEGORY_ID)
                    .table(Product::Table)
                    .col(Product::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCTS_CATEGORY_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCTS_BRAND_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    Sku,
    Title,
    Description,
    LongDescription,
    UkPrice,
    UkStock,
    Width,
    Depth,
    Height,
    Length,
    Dimensions,
    Ean,
    GrossWeight,
    NetWeight,
    CreationDate,
    BrandId,
    CategoryId,
    DefaultImageId,
}
