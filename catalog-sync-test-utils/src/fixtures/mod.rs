//! Fixtures for database rows and mock HTTP endpoints.
//!
//! - `catalog` - products, brands, categories, images and the listing endpoint

pub mod catalog;
