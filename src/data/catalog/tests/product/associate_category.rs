use super::*;

/// The category pointer is written to the product
#[tokio::test]
async fn sets_product_category() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let fridges = test.catalog().insert_mock_category("Fridges").await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.associate_category(product, &fridges).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().category_id, Some(fridges.id));

    let stored = repo.find_product("X1").await.unwrap().unwrap();
    assert_eq!(stored.category_id, Some(fridges.id));

    Ok(())
}

/// A later association wins over an earlier one
#[tokio::test]
async fn last_association_wins() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let product = test.catalog().insert_mock_product("X1").await?;
    let fridges = test.catalog().insert_mock_category("Fridges").await?;
    let freezers = test.catalog().insert_mock_category("Freezers").await?;

    let repo = CatalogRepository::new(&test.db);
    let product = repo.associate_category(product, &fridges).await.unwrap();
    let product = repo.associate_category(product, &freezers).await.unwrap();

    assert_eq!(product.category_id, Some(freezers.id));
    let stored = repo.find_product("X1").await.unwrap().unwrap();
    assert_eq!(stored.category_id, Some(freezers.id));

    Ok(())
}
