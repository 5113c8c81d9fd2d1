use super::*;

/// The default image can be moved to another image of the gallery
#[tokio::test]
async fn moves_default_within_gallery() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let front = test.catalog().insert_mock_image("/img/a.jpg").await?;
    let back = test.catalog().insert_mock_image("/img/b.jpg").await?;

    let repo = CatalogRepository::new(&test.db);
    let product = repo.associate_image(product, &front, true).await.unwrap();
    let product = repo.associate_image(product, &back, false).await.unwrap();
    let result = repo.set_default_image(product, &back).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().default_image_id, Some(back.id));

    Ok(())
}

/// Any existing gallery link is enough, however it was written
#[tokio::test]
async fn accepts_previously_linked_image() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let image = test.catalog().insert_mock_image("/img/a.jpg").await?;
    test.catalog()
        .insert_mock_product_image(product.id, image.id)
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.set_default_image(product, &image).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = repo.find_product("X1").await.unwrap().unwrap();
    assert_eq!(stored.default_image_id, Some(image.id));

    Ok(())
}

/// Pointing the default at an unlinked image fails and leaves the product as it was
#[tokio::test]
async fn refuses_image_outside_gallery() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let image = test.catalog().insert_mock_image("/img/a.jpg").await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.set_default_image(product.clone(), &image).await;

    match result {
        Err(CatalogError::InvariantViolation {
            product_id,
            image_id,
        }) => {
            assert_eq!(product_id, product.id);
            assert_eq!(image_id, image.id);
        }
        other => panic!("expected InvariantViolation, got {:?}", other),
    }

    let stored = repo.find_product("X1").await.unwrap().unwrap();
    assert_eq!(stored.default_image_id, None);
    let links = entity::prelude::ProductImage::find().all(&test.db).await?;
    assert!(links.is_empty());

    Ok(())
}

/// An existing default survives a refused change
#[tokio::test]
async fn keeps_previous_default_on_refusal() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let front = test.catalog().insert_mock_image("/img/a.jpg").await?;
    let stray = test.catalog().insert_mock_image("/img/stray.jpg").await?;

    let repo = CatalogRepository::new(&test.db);
    let product = repo.associate_image(product, &front, true).await.unwrap();
    let result = repo.set_default_image(product, &stray).await;

    assert!(matches!(
        result,
        Err(CatalogError::InvariantViolation { .. })
    ));

    let stored = repo.find_product("X1").await.unwrap().unwrap();
    assert_eq!(stored.default_image_id, Some(front.id));

    Ok(())
}
