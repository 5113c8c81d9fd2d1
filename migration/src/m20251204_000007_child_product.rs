use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251204_000004_product::Product;

static FK_CHILD_PRODUCTS_PARENT_ID: &str = "fk-child_products-parent_product_id";
static FK_CHILD_PRODUCTS_CHILD_ID: &str = "fk-child_products-child_product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChildProduct::Table)
                    .if_not_exists()
                    .col(integer(ChildProduct::ParentProductId))
                    .col(integer(ChildProduct::ChildProductId))
                    .primary_key(
                        Index::create()
                            .col(ChildProduct::ParentProductId)
                            .col(ChildProduct::ChildProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHILD_PRODUCTS_PARENT_ID)
                            .from(ChildProduct::Table, ChildProduct::ParentProductId)
                            .to(Product::Table, Product::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHILD_PRODUCTS_CHILD_ID)
                            .from(ChildProduct::Table, ChildProduct::ChildProductId)
                            .to(Product::Table, Product::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChildProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChildProduct {
    #[sea_orm(iden = "child_products")]
    Table,
    ParentProductId,
    ChildProductId,
}
