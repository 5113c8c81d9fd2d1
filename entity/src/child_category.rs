//! One level of the category hierarchy.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "child_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_category_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub child_category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::ParentCategoryId",
        to = "super::category::Column::Id"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::ChildCategoryId",
        to = "super::category::Column::Id"
    )]
    Child,
}

impl ActiveModelBehavior for ActiveModel {}
