use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::Error,
    service::{fetcher::PaginatedFetcher, retry::RetryContext},
    source::GraphQlCatalogSource,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the GraphQL catalog client with the configured credentials
pub fn build_catalog_source(config: &Config) -> Result<GraphQlCatalogSource, Error> {
    let source = GraphQlCatalogSource::new(
        &config.api_url,
        &config.api_key,
        config.request_timeout,
    )?;

    Ok(source)
}

/// Build a fetcher over the catalog source using the configured paging and backoff
pub fn build_fetcher(config: &Config) -> Result<PaginatedFetcher<GraphQlCatalogSource>, Error> {
    let source = build_catalog_source(config)?;
    let retry = RetryContext::new(config.max_retries, config.initial_backoff);

    Ok(PaginatedFetcher::new(source, config.page_size, retry))
}
