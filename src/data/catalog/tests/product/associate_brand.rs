use super::*;

/// The brand pointer is written to the product
#[tokio::test]
async fn sets_product_brand() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let brand = test.catalog().insert_mock_brand("Acme").await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.associate_brand(product, &brand).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().brand_id, Some(brand.id));

    let stored = repo.find_product("X1").await.unwrap().unwrap();
    assert_eq!(stored.brand_id, Some(brand.id));

    Ok(())
}

/// Associating the same brand twice leaves the product unchanged
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let brand = test.catalog().insert_mock_brand("Acme").await?;

    let repo = CatalogRepository::new(&test.db);
    let first = repo.associate_brand(product, &brand).await.unwrap();
    let second = repo.associate_brand(first.clone(), &brand).await;

    assert!(second.is_ok(), "Error: {:?}", second);
    assert_eq!(second.unwrap(), first);

    Ok(())
}

/// Associating a different brand replaces the previous one
#[tokio::test]
async fn replaces_previous_brand() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let acme = test.catalog().insert_mock_brand("Acme").await?;
    let globex = test.catalog().insert_mock_brand("Globex").await?;

    let repo = CatalogRepository::new(&test.db);
    let product = repo.associate_brand(product, &acme).await.unwrap();
    let result = repo.associate_brand(product, &globex).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().brand_id, Some(globex.id));

    Ok(())
}
