pub use sea_orm_migration::prelude::*;

mod m20251204_000001_brand;
mod m20251204_000002_category;
mod m20251204_000003_image;
mod m20251204_000004_product;
mod m20251204_000005_product_image;
mod m20251204_000006_child_category;
mod m20251204_000007_child_product;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251204_000001_brand::Migration),
            Box::new(m20251204_000002_category::Migration),
            Box::new(m20251204_000003_image::Migration),
            Box::new(m20251204_000004_product::Migration),
            Box::new(m20251204_000005_product_image::Migration),
            Box::new(m20251204_000006_child_category::Migration),
            Box::new(m20251204_000007_child_product::Migration),
        ]
    }
}
