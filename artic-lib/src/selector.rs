//! Cross-page selection: "select the first N artworks overall".

use futures::StreamExt;
use futures::stream;

use crate::error::Error;
use crate::model::ArtworkId;
use crate::source::PageSource;

/// Collects the identifiers of the first N records across upstream pages.
///
/// Pages are walked from page 1 forward. Each page contributes up to the
/// number still needed, and the walk stops once N records were taken or a
/// page comes back empty.
///
/// With a concurrency of 1 (the default) pages are fetched strictly one
/// after another. A higher concurrency fetches that many pages ahead, but
/// results are still consumed in page order, so the outcome is identical.
/// Prefetched pages past the stopping point are dropped unfinished.
///
/// # Example
///
/// ```ignore
/// let selector = CrossPageSelector::new().with_concurrency(4);
///
/// if let Some(ids) = selector.select_first(&client, Some(30)).await? {
///     state.complete_bulk_select(ids);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossPageSelector {
    concurrency: usize,
}

impl CrossPageSelector {
    /// Creates a sequential selector.
    pub fn new() -> Self {
        Self { concurrency: 1 }
    }

    /// Sets how many pages may be in flight at once. Zero is raised to one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the configured page concurrency.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the identifiers of the first `count` records.
    ///
    /// `None` or a non-positive count is a no-op and returns `Ok(None)`.
    /// Fewer than `count` identifiers come back when upstream runs out.
    /// A record without an identifier still counts as taken.
    ///
    /// The first fetch error aborts the walk and is returned as is; no
    /// partial result is produced.
    pub async fn select_first<S>(
        &self,
        source: &S,
        count: Option<i64>,
    ) -> Result<Option<Vec<ArtworkId>>, Error>
    where
        S: PageSource + ?Sized,
    {
        let Some(count) = count.filter(|n| *n > 0) else {
            return Ok(None);
        };

        let mut remaining = usize::try_from(count).unwrap_or(usize::MAX);
        let mut ids = Vec::new();
        let mut fetched = 0u32;

        let mut pages = stream::iter(1u32..)
            .map(|page| source.fetch_page(page))
            .buffered(self.concurrency);

        while remaining > 0 {
            let Some(result) = pages.next().await else {
                break;
            };
            let page = result?;
            fetched += 1;

            if page.is_empty() {
                log::debug!("page {} is empty, upstream exhausted", fetched);
                break;
            }

            let take = remaining.min(page.len());
            ids.extend(page.records()[..take].iter().filter_map(|row| row.id));
            remaining -= take;
        }

        log::info!(
            "selected {} of {} requested artworks from {} pages",
            ids.len(),
            count,
            fetched
        );
        Ok(Some(ids))
    }
}

impl Default for CrossPageSelector {
    fn default() -> Self {
        Self::new()
    }
}
