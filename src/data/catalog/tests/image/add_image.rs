use super::*;

/// The image is stored with the descriptor's metadata
#[tokio::test]
async fn creates_image() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_image(&image_ref("/img/a.jpg")).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.fullpath, "/img/a.jpg");
    assert_eq!(created.filename, "a.jpg");
    assert_eq!(created.mimetype.as_deref(), Some("image/jpeg"));

    Ok(())
}

/// Expect ConstraintViolation for a path that is already stored
#[tokio::test]
async fn rejects_duplicate_fullpath() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_image("/img/a.jpg")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_image(&image_ref("/img/a.jpg")).await;

    assert!(
        matches!(result, Err(CatalogError::ConstraintViolation { entity: "image", .. })),
        "Unexpected result: {:?}",
        result
    );

    Ok(())
}

/// Expect EmptyImageEnvelope when there is nothing to store
#[tokio::test]
async fn rejects_empty_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_image(&ImageRef::Wrapped { image: None }).await;

    assert!(matches!(result, Err(CatalogError::EmptyImageEnvelope)));

    let images = entity::prelude::Image::find().all(&test.db).await?;
    assert!(images.is_empty());

    Ok(())
}
