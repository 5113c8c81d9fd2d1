mod brand;
mod category;
mod image;
mod product;

use catalog_sync_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::*;
use crate::{
    error::catalog::CatalogError,
    model::record::{CategoryDescriptor, ImageDescriptor, ImageRef, NewProduct, ProductRecord},
};

fn new_product(sku: &str) -> NewProduct {
    let record = ProductRecord::from_raw(factory::mock_product_record(sku)).unwrap();

    NewProduct::from(&record)
}

fn image_ref(fullpath: &str) -> ImageRef {
    let descriptor: ImageDescriptor =
        serde_json::from_value(factory::mock_image_descriptor(fullpath)).unwrap();

    ImageRef::from(descriptor)
}

fn category(name: &str, parent: Option<&str>) -> CategoryDescriptor {
    serde_json::from_value(factory::mock_category(name, parent)).unwrap()
}
