//! Mock catalog payloads in the source's wire format.
//!
//! Every helper returns a plain [`serde_json::Value`] so tests can tweak individual fields
//! (`record["brand"] = json!("Acme")`) before handing them to a mock endpoint.

use serde_json::{json, Value};

/// A product record with all required fields populated and no associations.
pub fn mock_product_record(sku: &str) -> Value {
    json!({
        "sku": sku,
        "title": format!("Product {}", sku),
        "description": format!("Description of product {}", sku),
        "longDescription": null,
        "brand": null,
        "category": null,
        "depth": 500,
        "height": 1800,
        "width": 600,
        "length": null,
        "dimensions": "1800x600x500(HxWxD)",
        "ean": null,
        "grossWeight": 100.34,
        "netWeight": 80.54,
        "ukPrice": 500.45,
        "ukStock": 325,
        "creationDate": 1764842719,
        "extraImages": null,
        "defaultImage": null,
        "children": null
    })
}

/// A bare image descriptor, as carried by `defaultImage`.
pub fn mock_image_descriptor(fullpath: &str) -> Value {
    let filename = fullpath.rsplit('/').next().unwrap_or(fullpath);

    json!({
        "creationDate": 1764842719,
        "filename": filename,
        "fullpath": fullpath,
        "mimetype": "image/jpeg",
        "modificationDate": 1764842719
    })
}

/// A gallery entry, the descriptor wrapped in an `{ "image": ... }` envelope.
pub fn mock_gallery_image(fullpath: &str) -> Value {
    json!({ "image": mock_image_descriptor(fullpath) })
}

/// A category descriptor with an optional parent.
pub fn mock_category(name: &str, parent: Option<&str>) -> Value {
    json!({
        "name": name,
        "parent": parent.map(|parent| json!({ "name": parent })),
        "children": []
    })
}

/// A product record carrying a brand, one category and a default image.
pub fn mock_full_product_record(
    sku: &str,
    brand: &str,
    category: &str,
    default_image: &str,
) -> Value {
    let mut record = mock_product_record(sku);
    record["brand"] = json!(brand);
    record["category"] = json!([mock_category(category, None)]);
    record["defaultImage"] = mock_image_descriptor(default_image);
    record
}
