use std::process::ExitCode;

use catalog_sync::{
    config::Config,
    service::{
        catalog::CatalogService,
        sync::{SyncOptions, SyncService},
    },
    startup,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let skus: Vec<String> = std::env::args().skip(1).collect();

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to prepare database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match startup::build_fetcher(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Failed to build catalog client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting catalog sync from {}", config.api_url);

    let options = SyncOptions {
        fail_fast: config.fail_fast,
    };
    let outcome = SyncService::new(&db, options).run(fetcher).await;

    let catalog = CatalogService::new(&db);
    match catalog.counts().await {
        Ok(counts) => info!("Catalog now holds {}", counts),
        Err(e) => error!("Failed to count catalog rows: {}", e),
    }

    for sku in &skus {
        match catalog.product_details(sku).await {
            Ok(Some(details)) => println!("{:#?}", details),
            Ok(None) => println!("No product with SKU {}", sku),
            Err(e) => error!("Failed to look up product {}: {}", sku, e),
        }
    }

    match outcome {
        Ok(report) => {
            for failure in &report.failures {
                error!(
                    "Record {} was not ingested: {}",
                    failure.sku.as_deref().unwrap_or("<unknown sku>"),
                    failure.reason
                );
            }

            ExitCode::SUCCESS
        }
        Err(abort) => {
            error!("{}", abort);
            error!("Committed before the failure: {}", abort.report);

            ExitCode::FAILURE
        }
    }
}
