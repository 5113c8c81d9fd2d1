//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models of the `entity` crate, so signatures across
//! the repository and services don't need to spell out `entity::<table>::Model`.

/// A product row, keyed by its unique SKU.
///
/// # Fields (from `entity::product::Model`)
/// - `id` - Primary key
/// - `sku` - Natural key supplied by the catalog source (unique)
/// - `brand_id` / `category_id` - Optional references, set by the repository after insert
/// - `default_image_id` - Optional reference to one of the product's own gallery images
pub type ProductModel = entity::product::Model;

/// A brand, unique by name.
pub type BrandModel = entity::brand::Model;

/// A category node, looked up by name.
pub type CategoryModel = entity::category::Model;

/// An image, unique by its storage path (`fullpath`).
pub type ImageModel = entity::image::Model;

/// Gallery membership of an image for a product.
pub type ProductImageModel = entity::product_image::Model;

/// One level of category hierarchy (parent, child).
pub type ChildCategoryModel = entity::child_category::Model;

/// Product variant link (parent, child).
pub type ChildProductModel = entity::child_product::Model;
