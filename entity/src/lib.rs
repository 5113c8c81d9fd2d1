//! SeaORM entities for the synchronized product catalog.

pub mod prelude;

pub mod brand;
pub mod category;
pub mod child_category;
pub mod child_product;
pub mod image;
pub mod product;
pub mod product_image;
