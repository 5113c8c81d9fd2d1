use sea_orm::entity::prelude::*;

/// A catalog product keyed by its SKU.
///
/// `default_image_id`, when set, always references an image that is linked to
/// this product through [`super::product_image`]. The invariant is enforced by
/// the catalog repository before the pointer is written.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sku: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub long_description: Option<String>,
    pub uk_price: f64,
    pub uk_stock: i32,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub dimensions: Option<String>,
    pub ean: Option<String>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub creation_date: i64,
    pub brand_id: Option<i32>,
    pub category_id: Option<i32>,
    pub default_image_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::DefaultImageId",
        to = "super::image::Column::Id"
    )]
    DefaultImage,
    #[sea_orm(has_many = "super::product_image::Entity")]
    ProductImage,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
