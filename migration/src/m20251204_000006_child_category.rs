use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251204_000002_category::Category;

static FK_CHILD_CATEGORIES_PARENT_ID: &str = "fk-child_categories-parent_category_id";
static FK_CHILD_CATEGORIES_CHILD_ID: &str = "fk-child_categories-child_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChildCategory::Table)
                    .if_not_exists()
                    .col(integer(ChildCategory::ParentCategoryId))
                    .col(integer(ChildCategory::ChildCategoryId))
                    .primary_key(
                        Index::create()
                            .col(ChildCategory::ParentCategoryId)
                            .col(ChildCategory::ChildCategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHILD_CATEGORIES_PARENT_ID)
                            .from(ChildCategory::Table, ChildCategory::ParentCategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHILD_CATEGORIES_CHILD_ID)
                            .from(ChildCategory::Table, ChildCategory::ChildCategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChildCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChildCategory {
    #[sea_orm(iden = "child_categories")]
    Table,
    ParentCategoryId,
    ChildCategoryId,
}
