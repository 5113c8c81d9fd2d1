//! Forward-only record sequence over a paginated catalog source.

use std::collections::VecDeque;

use futures::{stream, Stream};
use tracing::{debug, info};

use crate::{
    error::Error,
    model::page::{PageRequest, RawRecord},
    service::retry::RetryContext,
    source::CatalogSource,
};


/// Presents a [`CatalogSource`] as one lazy sequence of records.
///
/// Pages are requested only once the previous one has been drained. Rate limiting is
/// absorbed by the [`RetryContext`]; any other failure, or running out of retries, is
/// returned to the caller and ends the sequence. A fetcher is not restartable, build a new
/// one to start over.
pub struct PaginatedFetcher<S> {
    source: S,
    retry: RetryContext,
    page_size: u64,
    /// Records fetched so far, the offset of the next page request
    offset: u64,
    /// Declared by the first page, never updated afterwards
    total_count: Option<u64>,
    has_more: bool,
    buffer: VecDeque<RawRecord>,
    pages_fetched: u64,
}

impl<S: CatalogSource> PaginatedFetcher<S> {
    /// Creates a new instance of [`PaginatedFetcher`]
    pub fn new(source: S, page_size: u64, retry: RetryContext) -> Self {
        Self {
            source,
            retry,
            page_size,
            offset: 0,
            total_count: None,
            has_more: true,
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Next record of the sequence, `None` once the source is exhausted.
    ///
    /// After an error the fetcher is exhausted and keeps returning `None`.
    pub async fn next_record(&mut self) -> Result<Option<RawRecord>, Error> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Ok(Some(record));
            }

            if !self.has_more {
                return Ok(None);
            }

            if let Err(e) = self.fetch_next_page().await {
                self.has_more = false;
                return Err(e);
            }
        }
    }

    /// Consumes the fetcher into a stream of records, ending after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<RawRecord, Error>> {
        stream::try_unfold(self, |mut fetcher| async move {
            let record = fetcher.next_record().await?;

            Ok::<_, Error>(record.map(|record| (record, fetcher)))
        })
    }

    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    async fn fetch_next_page(&mut self) -> Result<(), Error> {
        let request = PageRequest {
            page_size: self.page_size,
            offset: self.offset,
        };
        let source = &self.source;

        let page = self
            .retry
            .execute_with_retry(&format!("page at offset {}", request.offset), || async move {
                source.fetch_page(request).await.map_err(Error::from)
            })
            .await?;

        let returned = page.records.len() as u64;
        let total_count = *self.total_count.get_or_insert(page.total_count);

        self.pages_fetched += 1;
        self.offset += returned;
        self.has_more = returned > 0 && self.offset < total_count;
        self.buffer.extend(page.records);

        debug!(
            "Fetched {} records at offset {} ({}/{})",
            returned, request.offset, self.offset, total_count
        );

        if !self.has_more {
            info!(
                "Catalog source exhausted after {} records in {} pages",
                self.offset, self.pages_fetched
            );
        }

        Ok(())
    }
}
