//! Parsed product records and the descriptors they carry.
//!
//! Field names follow the source's wire format (camelCase). Parsing happens per record in
//! [`ProductRecord::from_raw`]; a failure there is a [`Error::DataShape`] for that record
//! only.

use serde::Deserialize;

use crate::{error::Error, model::page::RawRecord};

/// A product as declared by the catalog source.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub sku: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<Vec<CategoryDescriptor>>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub dimensions: Option<String>,
    pub ean: Option<String>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub uk_price: f64,
    pub uk_stock: i32,
    pub creation_date: i64,
    pub extra_images: Option<Vec<ImageRef>>,
    pub default_image: Option<ImageDescriptor>,
    pub children: Option<Vec<ChildRef>>,
}

/// A category with, optionally, the parent it hangs under.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryDescriptor {
    pub name: String,
    pub parent: Option<ParentCategory>,
}

/// The parent of a category. Parents that are not categories come through as empty objects.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ParentCategory {
    pub name: Option<String>,
}

impl CategoryDescriptor {
    /// Name of the parent category, `None` when there is no parent category
    pub fn parent_name(&self) -> Option<&str> {
        self.parent
            .as_ref()
            .and_then(|parent| parent.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Image metadata as published by the source. `fullpath` is the natural key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub creation_date: Option<i64>,
    pub filename: String,
    pub fullpath: String,
    pub mimetype: Option<String>,
    pub modification_date: Option<i64>,
}

/// An image either given directly or wrapped in an `{ "image": ... }` envelope.
///
/// Gallery images arrive wrapped, the default image arrives bare. Both normalize to the
/// same [`ImageDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Bare(ImageDescriptor),
    Wrapped { image: Option<ImageDescriptor> },
}

impl ImageRef {
    /// The wrapped descriptor, `None` for an empty envelope.
    pub fn descriptor(&self) -> Option<&ImageDescriptor> {
        match self {
            Self::Bare(descriptor) => Some(descriptor),
            Self::Wrapped { image } => image.as_ref(),
        }
    }
}

impl From<ImageDescriptor> for ImageRef {
    fn from(descriptor: ImageDescriptor) -> Self {
        Self::Bare(descriptor)
    }
}

/// Reference to a variant product. Non-product children come through as empty objects.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChildRef {
    pub sku: Option<String>,
}

impl ProductRecord {
    /// Parses a raw record, reporting a [`Error::DataShape`] when a field this crate
    /// depends on is missing or mistyped.
    pub fn from_raw(raw: RawRecord) -> Result<Self, Error> {
        let sku = raw
            .get("sku")
            .and_then(|sku| sku.as_str())
            .map(str::to_string);

        serde_json::from_value(raw).map_err(|err| Error::DataShape {
            sku,
            reason: err.to_string(),
        })
    }

    /// Brand name, ignoring blank values
    pub fn brand_name(&self) -> Option<&str> {
        self.brand
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn categories(&self) -> &[CategoryDescriptor] {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn extra_images(&self) -> &[ImageRef] {
        self.extra_images.as_deref().unwrap_or_default()
    }

    /// SKUs of the declared variant products
    pub fn child_skus(&self) -> impl Iterator<Item = &str> {
        self.children
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|child| child.sku.as_deref())
    }
}

/// Scalar attributes of a product row, without any of its associations.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub sku: String,
    pub title: String,
    pub description: String,
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
}

impl From<&ProductRecord> for NewProduct {
    fn from(record: &ProductRecord) -> Self {
        Self {
            sku: record.sku.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            long_description: record.long_description.clone(),
            uk_price: record.uk_price,
            uk_stock: record.uk_stock,
            width: record.width,
            depth: record.depth,
            height: record.height,
            length: record.length,
            dimensions: record.dimensions.clone(),
            ean: record.ean.clone(),
            gross_weight: record.gross_weight,
            net_weight: record.net_weight,
            creation_date: record.creation_date,
        }
    }
}
