use super::*;

/// The product is stored with its scalar attributes and no associations
#[tokio::test]
async fn creates_product_without_associations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_product(new_product("X1")).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.sku, "X1");
    assert_eq!(created.title, "Product X1");
    assert_eq!(created.uk_stock, 325);
    assert_eq!(created.height, Some(1800.0));
    assert_eq!(created.brand_id, None);
    assert_eq!(created.category_id, None);
    assert_eq!(created.default_image_id, None);

    Ok(())
}

/// Expect ConstraintViolation when the SKU is already stored
#[tokio::test]
async fn rejects_duplicate_sku() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_product("X1")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_product(new_product("X1")).await;

    match result {
        Err(CatalogError::ConstraintViolation { entity, key }) => {
            assert_eq!(entity, "product");
            assert_eq!(key, "X1");
        }
        other => panic!("expected ConstraintViolation, got {:?}", other),
    }

    Ok(())
}
