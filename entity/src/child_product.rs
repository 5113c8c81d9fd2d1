//! Product variant relationship, e.g. an accessory belonging to a parent product.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "child_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_product_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub child_product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ParentProductId",
        to = "super::product::Column::Id"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ChildProductId",
        to = "super::product::Column::Id"
    )]
    Child,
}

impl ActiveModelBehavior for ActiveModel {}
