use super::*;

/// The variant link is created once and reported as new
#[tokio::test]
async fn links_child_product() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let parent = test.catalog().insert_mock_product("X1").await?;
    let child = test.catalog().insert_mock_product("X1-A").await?;

    let repo = CatalogRepository::new(&test.db);
    let result = repo.associate_child_product(&parent, &child).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let link = result.unwrap().expect("link should be new");
    assert_eq!(link.parent_product_id, parent.id);
    assert_eq!(link.child_product_id, child.id);

    Ok(())
}

/// Expect None when the link already exists
#[tokio::test]
async fn returns_none_for_existing_link() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let parent = test.catalog().insert_mock_product("X1").await?;
    let child = test.catalog().insert_mock_product("X1-A").await?;

    let repo = CatalogRepository::new(&test.db);
    repo.associate_child_product(&parent, &child).await.unwrap();
    let result = repo.associate_child_product(&parent, &child).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    let links = entity::prelude::ChildProduct::find().all(&test.db).await?;
    assert_eq!(links.len(), 1);

    Ok(())
}

/// The link is directed, the child does not become the parent's parent
#[tokio::test]
async fn link_is_directed() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let parent = test.catalog().insert_mock_product("X1").await?;
    let child = test.catalog().insert_mock_product("X1-A").await?;

    let repo = CatalogRepository::new(&test.db);
    repo.associate_child_product(&parent, &child).await.unwrap();

    assert!(repo
        .find_child_product_link(&child, &parent)
        .await
        .unwrap()
        .is_none());

    Ok(())
}
