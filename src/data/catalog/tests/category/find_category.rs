use super::*;

/// Expect Some when a category with the descriptor's name exists
#[tokio::test]
async fn finds_existing_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_category("Fridges")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.find_category(&category("Fridges", None)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Fridges");

    Ok(())
}

/// The parent named in the descriptor does not take part in the lookup
#[tokio::test]
async fn ignores_parent_when_finding() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_category("Fridges")
        .build()
        .await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo
        .find_category(&category("Fridges", Some("Refrigeration")))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_some());

    Ok(())
}

/// Expect None when no category with that name exists
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.find_category(&category("Fridges", None)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    Ok(())
}
