use super::*;

/// Expect Some when a product with the SKU exists
#[tokio::test]
async fn finds_existing_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_product("X1")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.find_product("X1").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let product = result.unwrap();
    assert!(product.is_some());
    assert_eq!(product.unwrap().sku, "X1");

    Ok(())
}

/// Expect None for an unknown SKU
#[tokio::test]
async fn returns_none_for_unknown_sku() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_product("X1")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.find_product("X2").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    Ok(())
}
