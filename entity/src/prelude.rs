pub use super::brand::Entity as Brand;
pub use super::category::Entity as Category;
pub use super::child_category::Entity as ChildCategory;
pub use super::child_product::Entity as ChildProduct;
pub use super::image::Entity as Image;
pub use super::product::Entity as Product;
pub use super::product_image::Entity as ProductImage;
