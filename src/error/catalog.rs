use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors reported by the [`CatalogRepository`](crate::data::catalog::CatalogRepository).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An insert collided with a uniqueness or foreign key constraint.
    #[error("Constraint violation on {entity} {key:?}")]
    ConstraintViolation { entity: &'static str, key: String },
    /// A product's default image would not be part of its own gallery.
    #[error(
        "Image {image_id} is not linked to product {product_id}, refusing to set it as default image"
    )]
    InvariantViolation { product_id: i32, image_id: i32 },
    /// An extra image envelope without an image descriptor inside.
    #[error("Image envelope does not contain an image descriptor")]
    EmptyImageEnvelope,
    /// Any other database failure.
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl CatalogError {
    /// Maps a failed insert into a [`CatalogError::ConstraintViolation`] when the store
    /// rejected it on a constraint, keeping every other database error as is.
    pub fn from_insert(err: DbErr, entity: &'static str, key: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::ConstraintViolation {
                entity,
                key: key.into(),
            },
            _ => Self::DbErr(err),
        }
    }

    pub fn is_record_scoped(&self) -> bool {
        !matches!(self, Self::DbErr(_))
    }
}
