//! In-memory page source shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use artic_lib::PageSource;
use artic_lib::api::Page;
use artic_lib::error::ApiError;
use artic_lib::error::Error;
use artic_lib::model::ArtworkId;
use artic_lib::model::ArtworkRow;
use artic_lib::table::LoadOutcome;
use artic_lib::table::TableState;
use async_trait::async_trait;

/// Serves fixed chunks of identifiers as pages 1, 2, ... and an empty page
/// after the last chunk.
pub struct MockSource {
    chunks: Vec<Vec<u64>>,
    total: Option<u64>,
    fail_on: Option<u32>,
    delay: Option<fn(u32) -> Duration>,
    calls: Mutex<Vec<u32>>,
}

impl MockSource {
    pub fn from_chunks(chunks: Vec<Vec<u64>>) -> Self {
        let total = chunks.iter().map(|c| c.len() as u64).sum();
        Self {
            chunks,
            total: Some(total),
            fail_on: None,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `total` records with consecutive ids from `first_id`, `page_size` per page.
    pub fn uniform(total: u64, page_size: u64, first_id: u64) -> Self {
        let ids: Vec<u64> = (first_id..first_id + total).collect();
        let chunks = ids
            .chunks(page_size as usize)
            .map(<[u64]>::to_vec)
            .collect();
        Self::from_chunks(chunks)
    }

    /// Reports a different `pagination.total` than the chunks add up to.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Leaves `pagination.total` out of every page.
    pub fn without_total(mut self) -> Self {
        self.total = None;
        self
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on = Some(page);
        self
    }

    pub fn with_delay(mut self, delay: fn(u32) -> Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Pages requested so far, in request order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch_page(&self, page: u32) -> Result<Page<ArtworkRow>, Error> {
        self.calls.lock().unwrap().push(page);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay(page)).await;
        }

        if self.fail_on == Some(page) {
            return Err(ApiError::http(503, "upstream unavailable").into());
        }

        let rows = self
            .chunks
            .get(page as usize - 1)
            .map(|ids| ids.iter().map(|id| row(*id)).collect())
            .unwrap_or_default();

        let page = Page::new(rows);
        Ok(match self.total {
            Some(total) => page.with_total_count(total),
            None => page,
        })
    }
}

pub fn row(id: u64) -> ArtworkRow {
    ArtworkRow {
        id: Some(ArtworkId(id)),
        title: Some(format!("Artwork {id}")),
        place_of_origin: Some("Chicago".to_string()),
        ..Default::default()
    }
}

pub fn ids(raw: impl IntoIterator<Item = u64>) -> Vec<ArtworkId> {
    raw.into_iter().map(ArtworkId).collect()
}

/// Fetches the current page from `source` and applies it to `state`.
pub async fn load(state: &mut TableState, source: &impl PageSource) -> LoadOutcome {
    let ticket = state.reload();
    let result = source.fetch_page(ticket.page()).await;
    state.complete_load(ticket, result)
}
