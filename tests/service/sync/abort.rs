use catalog_sync::{data::catalog::CatalogRepository, error::source::SourceError};
use mockito::Matcher;

use super::*;

/// A failing page aborts the pass, products from earlier pages stay committed
#[tokio::test]
async fn keeps_committed_products_on_source_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/")
                .match_body(Matcher::PartialJson(json!({ "variables": { "after": 2 } })))
                .with_status(503)
                .expect(1)
                .create()
        })
        .with_listing_page(
            0,
            4,
            vec![
                factory::mock_product_record("A1"),
                factory::mock_product_record("A2"),
            ],
            1,
        )
        .build()
        .await?;

    let result = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 2))
        .await;

    let abort = result.expect_err("pass should abort");
    assert!(matches!(
        abort.source,
        Error::SourceError(SourceError::Status(503))
    ));
    assert_eq!(abort.report.pages_fetched, 1);
    assert_eq!(abort.report.products_added, 2);

    let counts = CatalogService::new(&test.db).counts().await.unwrap();
    assert_eq!(counts.products, 2);

    test.assert_mocks();

    Ok(())
}

/// A broken store aborts the pass instead of failing record after record
#[tokio::test]
async fn aborts_on_database_error() -> Result<(), TestError> {
    // No catalog tables, every lookup fails
    let test = TestBuilder::new()
        .with_listing_page(
            0,
            2,
            vec![
                factory::mock_product_record("A1"),
                factory::mock_product_record("A2"),
            ],
            1,
        )
        .build()
        .await?;

    let result = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 100))
        .await;

    let abort = result.expect_err("pass should abort");
    assert!(!abort.source.is_record_scoped());
    assert_eq!(abort.report.records_seen, 1);
    assert!(abort.report.failures.is_empty());

    Ok(())
}

/// A record failing after its product row was written leaves nothing of it behind
#[tokio::test]
async fn rolls_back_record_failing_on_images() -> Result<(), TestError> {
    // No gallery table, linking the default image is the first write to fail
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .with_table(entity::prelude::Category)
        .with_table(entity::prelude::ChildCategory)
        .with_table(entity::prelude::Image)
        .with_table(entity::prelude::Product)
        .with_table(entity::prelude::ChildProduct)
        .with_listing_page(
            0,
            1,
            vec![factory::mock_full_product_record(
                "X1",
                "Acme",
                "Fridges",
                "/img/a.jpg",
            )],
            1,
        )
        .build()
        .await?;

    let result = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 100))
        .await;

    let abort = result.expect_err("pass should abort");
    assert!(matches!(abort.source, Error::CatalogError(_)));
    assert_eq!(abort.report.products_added, 0);
    assert_eq!(abort.report.brands_created, 0);

    let repo = CatalogRepository::new(&test.db);
    assert_eq!(repo.count_products().await.unwrap(), 0);
    assert_eq!(repo.count_brands().await.unwrap(), 0);
    assert_eq!(repo.count_categories().await.unwrap(), 0);
    assert_eq!(repo.count_images().await.unwrap(), 0);

    Ok(())
}
