use super::*;

/// Expect Ok with the stored brand when the name is new
#[tokio::test]
async fn creates_brand() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_brand("Acme").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.name, "Acme");

    let found = repo.find_brand("Acme").await.unwrap();
    assert_eq!(found, Some(created));

    Ok(())
}

/// Expect ConstraintViolation when the brand name is already taken
#[tokio::test]
async fn rejects_duplicate_brand() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_brand("Acme")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.add_brand("Acme").await;

    match result {
        Err(CatalogError::ConstraintViolation { entity, key }) => {
            assert_eq!(entity, "brand");
            assert_eq!(key, "Acme");
        }
        other => panic!("expected ConstraintViolation, got {:?}", other),
    }

    let count = entity::prelude::Brand::find().all(&test.db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
