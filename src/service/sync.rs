//! One synchronization pass from the catalog source into the local catalog.
//!
//! Every record is ingested inside its own transaction: the product row, its brand,
//! categories, images and variant links are committed together or not at all. Products
//! that are already stored are skipped, so running a pass twice over the same listing
//! changes nothing the second time.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, error, info, warn};

use crate::{
    data::catalog::CatalogRepository,
    error::{sync::SyncAbort, Error},
    model::{
        page::RawRecord,
        record::{ImageRef, NewProduct, ProductRecord},
        report::{RecordFailure, SyncReport},
    },
    service::{
        fetcher::PaginatedFetcher,
        resolve::{resolve_or_create, BrandName},
    },
    source::CatalogSource,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct SyncOptions {
    /// Abort the pass on the first failed record instead of skipping it
    pub fail_fast: bool,
}

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    options: SyncOptions,
}

/// What ingesting a single record did to the catalog
enum Ingest {
    /// The SKU was already stored
    Skipped,
    Added(RecordOutcome),
}

#[derive(Default)]
struct RecordOutcome {
    brands_created: u64,
    categories_created: u64,
    images_created: u64,
    child_links_created: u64,
    /// Child SKUs not stored yet, linked once the listing is exhausted
    pending_children: Vec<String>,
}

/// A variant link waiting for its child product to show up
struct PendingLink {
    parent_sku: String,
    child_sku: String,
}

impl<'a> SyncService<'a> {
    /// Creates a new instance of [`SyncService`]
    pub fn new(db: &'a DatabaseConnection, options: SyncOptions) -> Self {
        Self { db, options }
    }

    /// Runs one pass over every record the fetcher yields.
    ///
    /// Record-scoped failures (malformed records, constraint or invariant violations) are
    /// rolled back, recorded in the report and skipped unless `fail_fast` is set. Source
    /// failures and other database errors abort the pass.
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - The listing was exhausted
    /// - `Err(SyncAbort)` - The pass stopped early, carrying the report of what was
    ///   committed and the error that stopped it
    pub async fn run<S: CatalogSource>(
        &self,
        mut fetcher: PaginatedFetcher<S>,
    ) -> Result<SyncReport, SyncAbort> {
        let mut report = SyncReport::default();
        let mut pending = Vec::new();

        loop {
            let record = match fetcher.next_record().await {
                Ok(Some(record)) => record,
                Ok(None) => break,
                Err(e) => {
                    report.pages_fetched = fetcher.pages_fetched();
                    return Err(abort(report, e));
                }
            };

            report.records_seen += 1;
            let sku = record_sku(&record);

            match self.ingest(record).await {
                Ok(Ingest::Skipped) => {
                    debug!("Product {} already stored, skipping", sku.as_deref().unwrap_or("?"));
                    report.products_skipped += 1;
                }
                Ok(Ingest::Added(outcome)) => {
                    report.products_added += 1;
                    report.brands_created += outcome.brands_created;
                    report.categories_created += outcome.categories_created;
                    report.images_created += outcome.images_created;
                    report.child_links_created += outcome.child_links_created;

                    if let Some(parent_sku) = sku {
                        pending.extend(outcome.pending_children.into_iter().map(|child_sku| {
                            PendingLink {
                                parent_sku: parent_sku.clone(),
                                child_sku,
                            }
                        }));
                    }
                }
                Err(e) if e.is_record_scoped() => {
                    report.failures.push(RecordFailure {
                        sku,
                        reason: e.to_string(),
                    });

                    if self.options.fail_fast {
                        report.pages_fetched = fetcher.pages_fetched();
                        return Err(abort(report, e));
                    }

                    warn!("Skipping record: {}", e);
                }
                Err(e) => {
                    report.pages_fetched = fetcher.pages_fetched();
                    return Err(abort(report, e));
                }
            }
        }

        report.pages_fetched = fetcher.pages_fetched();

        if let Err(e) = self.link_pending_children(pending, &mut report).await {
            return Err(abort(report, e));
        }

        info!("Sync pass complete: {}", report);

        Ok(report)
    }

    /// Ingests one record inside a transaction of its own.
    ///
    /// A stored SKU is skipped before the rest of the record is parsed.
    async fn ingest(&self, raw: RawRecord) -> Result<Ingest, Error> {
        let txn = self.db.begin().await?;
        let repo = CatalogRepository::new(&txn);

        if let Some(sku) = record_sku(&raw) {
            if repo.find_product(&sku).await?.is_some() {
                return Ok(Ingest::Skipped);
            }
        }

        let record = ProductRecord::from_raw(raw)?;

        let mut outcome = RecordOutcome::default();
        let mut product = repo.add_product(NewProduct::from(&record)).await?;

        if let Some(name) = record.brand_name() {
            let brand = resolve_or_create(&repo, &BrandName(name)).await?;
            outcome.brands_created += brand.created;
            product = repo.associate_brand(product, &brand.model).await?;
        }

        // Products hold a single category, the last declared one ends up in it
        let mut category = None;
        for descriptor in record.categories() {
            let resolved = resolve_or_create(&repo, descriptor).await?;
            outcome.categories_created += resolved.created;
            category = Some(resolved.model);
        }
        if let Some(category) = category {
            product = repo.associate_category(product, &category).await?;
        }

        for image in record.extra_images() {
            if image.descriptor().is_none() {
                debug!("Ignoring empty gallery image entry of product {}", record.sku);
                continue;
            }

            let resolved = resolve_or_create(&repo, image).await?;
            outcome.images_created += resolved.created;
            product = repo.associate_image(product, &resolved.model, false).await?;
        }

        if let Some(default_image) = &record.default_image {
            let resolved = resolve_or_create(&repo, &ImageRef::from(default_image.clone())).await?;
            outcome.images_created += resolved.created;
            product = repo.associate_image(product, &resolved.model, true).await?;
        }

        for child_sku in record.child_skus() {
            if child_sku == record.sku {
                continue;
            }

            match repo.find_product(child_sku).await? {
                Some(child) => {
                    if repo.associate_child_product(&product, &child).await?.is_some() {
                        outcome.child_links_created += 1;
                    }
                }
                None => outcome.pending_children.push(child_sku.to_string()),
            }
        }

        txn.commit().await?;

        debug!("Added product {}", record.sku);

        Ok(Ingest::Added(outcome))
    }

    /// Links variants whose child product was ingested after its parent.
    async fn link_pending_children(
        &self,
        pending: Vec<PendingLink>,
        report: &mut SyncReport,
    ) -> Result<(), Error> {
        if pending.is_empty() {
            return Ok(());
        }

        debug!("Resolving {} pending variant links", pending.len());

        let repo = CatalogRepository::new(self.db);

        for link in pending {
            let parent = repo.find_product(&link.parent_sku).await?;
            let child = repo.find_product(&link.child_sku).await?;

            match (parent, child) {
                (Some(parent), Some(child)) => {
                    if repo.associate_child_product(&parent, &child).await?.is_some() {
                        report.child_links_created += 1;
                    }
                }
                _ => {
                    warn!(
                        "Variant {} of product {} is not in the catalog, leaving it unlinked",
                        link.child_sku, link.parent_sku
                    );
                    report.child_links_unresolved += 1;
                }
            }
        }

        Ok(())
    }
}

fn abort(report: SyncReport, source: Error) -> SyncAbort {
    error!("Aborting sync pass: {}", source);

    SyncAbort { report, source }
}

/// The record's SKU when it has one, for reporting records that fail to parse
fn record_sku(record: &RawRecord) -> Option<String> {
    record
        .get("sku")
        .and_then(|sku| sku.as_str())
        .map(str::to_string)
}
