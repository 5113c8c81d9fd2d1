use super::*;

fn listing_with_malformed_record() -> Vec<serde_json::Value> {
    let mut malformed = factory::mock_product_record("BAD");
    malformed["ukPrice"] = json!("not a number");

    vec![
        factory::mock_product_record("X1"),
        malformed,
        factory::mock_product_record("X2"),
    ]
}

/// A malformed record is reported and skipped, the rest of the pass continues
#[tokio::test]
async fn skips_malformed_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_listing_page(0, 3, listing_with_malformed_record(), 1)
        .build()
        .await?;

    let report = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 100))
        .await
        .unwrap();

    assert_eq!(report.records_seen, 3);
    assert_eq!(report.products_added, 2);
    assert_eq!(report.records_failed(), 1);
    assert_eq!(report.failures[0].sku.as_deref(), Some("BAD"));
    assert!(report.failures[0].reason.contains("Malformed product record BAD"));

    let catalog = CatalogService::new(&test.db);
    assert!(catalog.product_details("BAD").await.unwrap().is_none());
    assert!(catalog.product_details("X2").await.unwrap().is_some());

    Ok(())
}

/// A record without a SKU is reported without one
#[tokio::test]
async fn reports_record_without_sku() -> Result<(), TestError> {
    let mut record = factory::mock_product_record("X1");
    record.as_object_mut().unwrap().remove("sku");

    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_listing_page(0, 1, vec![record], 1)
        .build()
        .await?;

    let report = SyncService::new(&test.db, SyncOptions::default())
        .run(fetcher(&test, 100))
        .await
        .unwrap();

    assert_eq!(report.records_failed(), 1);
    assert_eq!(report.failures[0].sku, None);

    Ok(())
}

/// With fail_fast the first failed record aborts the pass
#[tokio::test]
async fn fail_fast_aborts_on_first_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_listing_page(0, 3, listing_with_malformed_record(), 1)
        .build()
        .await?;

    let result = SyncService::new(&test.db, SyncOptions { fail_fast: true })
        .run(fetcher(&test, 100))
        .await;

    let abort = result.expect_err("pass should abort");
    assert!(matches!(abort.source, Error::DataShape { .. }));
    assert_eq!(abort.report.records_seen, 2);
    assert_eq!(abort.report.products_added, 1);
    assert_eq!(abort.report.records_failed(), 1);

    let catalog = CatalogService::new(&test.db);
    assert!(catalog.product_details("X1").await.unwrap().is_some());
    assert!(catalog.product_details("X2").await.unwrap().is_none());

    Ok(())
}
