use super::*;

/// Rate limited pages are requested again until they succeed
#[tokio::test]
async fn recovers_from_rate_limiting() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_rate_limited_page(0, 3)
        .with_listing_page(0, 1, vec![factory::mock_product_record("X1")], 1)
        .build()
        .await?;

    let report = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 100))
        .await
        .unwrap();

    assert_eq!(report.products_added, 1);
    assert_eq!(report.pages_fetched, 1);

    test.assert_mocks();

    Ok(())
}

/// Six rate limited responses in a row abort the pass
#[tokio::test]
async fn aborts_when_rate_limit_persists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_rate_limited_page(0, 6)
        .build()
        .await?;

    let result = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 100))
        .await;

    let abort = result.expect_err("pass should abort");
    assert!(matches!(
        abort.source,
        Error::SourceError(catalog_sync::error::source::SourceError::RateLimited)
    ));
    assert_eq!(abort.report.pages_fetched, 0);
    assert_eq!(abort.report.records_seen, 0);

    test.assert_mocks();

    Ok(())
}
