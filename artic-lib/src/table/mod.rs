//! State behind the lazily paginated artworks table.
//!
//! [`TableState`] holds everything the view shows (current page, loading
//! flag, rows, record total, selection, count overlay) and changes only
//! through its transition methods. Fetching happens outside: a page change
//! hands out a [`LoadTicket`], the caller fetches that page however it
//! likes, and passes the ticket back with the result.
//!
//! Each ticket carries a generation number. Only the ticket from the most
//! recent page change is applied; results for pages the user already left
//! are dropped, so a slow response can no longer overwrite a newer page.

mod paginator;

pub use paginator::*;

use crate::api::Page;
use crate::error::Error;
use crate::model::ArtworkId;
use crate::model::ArtworkRow;
use crate::selection::SelectedIds;

/// Default number of rows per page. Matches the upstream default limit.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Handle for one page fetch, returned by the transitions that start one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    page: u32,
    generation: u64,
}

impl LoadTicket {
    /// The 1-based page this fetch is for.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What [`TableState::complete_load`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows were replaced; carries the number now displayed.
    Applied(usize),
    /// The fetch failed; rows were left as they were.
    Failed,
    /// A newer page change happened since this fetch started.
    Stale,
}

/// What [`TableState::finish_bulk_select`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The selection was replaced; carries the number now selected.
    Applied(usize),
    /// The count was unset or non-positive; nothing changed.
    Skipped,
    /// A fetch failed; selection and overlay were left as they were.
    Failed,
}

/// The table's state container.
#[derive(Debug, Clone)]
pub struct TableState {
    page: u32,
    page_size: usize,
    loading: bool,
    total_records: u64,
    rows: Vec<ArtworkRow>,
    selected: SelectedIds,
    overlay_open: bool,
    count_input: Option<i64>,
    bulk_running: bool,
    generation: u64,
}

impl TableState {
    /// Creates a state on page 1 with the default page size.
    ///
    /// Starts in the loading state; call [`TableState::reload`] to get the
    /// ticket for the initial fetch.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates a state with a custom page size. Zero is raised to one.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            loading: true,
            total_records: 0,
            rows: Vec::new(),
            selected: SelectedIds::new(),
            overlay_open: false,
            count_input: None,
            bulk_running: false,
            generation: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Page loading
    // -------------------------------------------------------------------------

    /// Starts a fetch of the current page.
    pub fn reload(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            page: self.page,
            generation: self.generation,
        }
    }

    /// Moves to a page and starts its fetch.
    ///
    /// The page is clamped into the known page range. Returns `None` when
    /// that leaves the page unchanged.
    pub fn change_page(&mut self, page: u32) -> Option<LoadTicket> {
        let page = self.paginator().clamp(page);
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.reload())
    }

    pub fn first_page(&mut self) -> Option<LoadTicket> {
        let target = self.paginator().first();
        self.change_page(target)
    }

    pub fn prev_page(&mut self) -> Option<LoadTicket> {
        let target = self.paginator().prev();
        self.change_page(target)
    }

    pub fn next_page(&mut self) -> Option<LoadTicket> {
        let target = self.paginator().next();
        self.change_page(target)
    }

    pub fn last_page(&mut self) -> Option<LoadTicket> {
        let target = self.paginator().last();
        self.change_page(target)
    }

    /// Applies the result of a page fetch.
    ///
    /// A successful page replaces the rows (cut to the page size) and the
    /// record total. A failure is logged and keeps the rows that were
    /// there. Either way the loading flag clears, unless the ticket is
    /// stale, in which case nothing changes.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Page<ArtworkRow>, Error>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping stale result for page {} (generation {}, current {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;

        match result {
            Ok(page) => {
                self.total_records = page.total_count().unwrap_or(0);
                let mut rows = page.into_records();
                rows.truncate(self.page_size);
                self.rows = rows;
                LoadOutcome::Applied(self.rows.len())
            }
            Err(e) => {
                log::error!("Error fetching page {}: {}", ticket.page, e);
                LoadOutcome::Failed
            }
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Handles a selection change reported for the current page.
    ///
    /// The identifiers are unioned into the global selection. Rows the user
    /// unchecked are not removed; only a bulk selection replaces the set.
    pub fn select_rows(&mut self, ids: impl IntoIterator<Item = ArtworkId>) -> usize {
        self.selected.union(ids)
    }

    /// Toggles the row at `index` on the current page.
    ///
    /// Computes the page's new checked set and reports it through
    /// [`TableState::select_rows`], so checking adds the row while
    /// unchecking leaves the global selection as it was.
    pub fn toggle_row(&mut self, index: usize) -> usize {
        let Some(target) = self.rows.get(index).and_then(|row| row.id) else {
            return 0;
        };

        let was_checked = self.selected.contains(target);
        let mut checked: Vec<ArtworkId> = self
            .visible_selection()
            .iter()
            .filter_map(|row| row.id)
            .filter(|id| *id != target)
            .collect();
        if !was_checked {
            checked.push(target);
        }
        self.select_rows(checked)
    }

    /// Checks every row on the current page.
    pub fn select_page(&mut self) -> usize {
        let ids: Vec<ArtworkId> = self.rows.iter().filter_map(|row| row.id).collect();
        self.select_rows(ids)
    }

    /// Rows on the current page that are selected.
    pub fn visible_selection(&self) -> Vec<&ArtworkRow> {
        self.selected.visible(&self.rows)
    }

    /// Returns `true` if the row at `index` renders as checked.
    pub fn is_row_selected(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .and_then(|row| row.id)
            .is_some_and(|id| self.selected.contains(id))
    }

    // -------------------------------------------------------------------------
    // Count overlay and bulk selection
    // -------------------------------------------------------------------------

    pub fn toggle_overlay(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// Sets the overlay's numeric input.
    pub fn set_count_input(&mut self, count: Option<i64>) {
        self.count_input = count;
    }

    /// The count a submit would request, or `None` when a submit is a no-op.
    pub fn pending_bulk_count(&self) -> Option<i64> {
        self.count_input.filter(|n| *n > 0)
    }

    /// Starts a bulk selection for the overlay's count.
    ///
    /// Returns the count to hand to the cross-page selector, or `None` when
    /// the count is unset or non-positive, or a bulk selection is already
    /// running.
    pub fn begin_bulk_select(&mut self) -> Option<i64> {
        if self.bulk_running {
            return None;
        }
        let count = self.pending_bulk_count()?;
        self.bulk_running = true;
        Some(count)
    }

    /// Applies the cross-page selector's result.
    ///
    /// On success the whole selection is replaced and the overlay closes.
    /// A failure is logged and changes nothing else.
    pub fn finish_bulk_select(
        &mut self,
        result: Result<Option<Vec<ArtworkId>>, Error>,
    ) -> BulkOutcome {
        self.bulk_running = false;
        match result {
            Ok(Some(ids)) => {
                self.complete_bulk_select(ids);
                BulkOutcome::Applied(self.selected.len())
            }
            Ok(None) => BulkOutcome::Skipped,
            Err(e) => {
                log::error!("Error selecting rows: {}", e);
                BulkOutcome::Failed
            }
        }
    }

    /// Replaces the whole selection and closes the overlay.
    pub fn complete_bulk_select(&mut self, ids: impl IntoIterator<Item = ArtworkId>) {
        self.selected.replace(ids);
        self.overlay_open = false;
    }

    pub fn is_bulk_running(&self) -> bool {
        self.bulk_running
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn rows(&self) -> &[ArtworkRow] {
        &self.rows
    }

    pub fn selected(&self) -> &SelectedIds {
        &self.selected
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn count_input(&self) -> Option<i64> {
        self.count_input
    }

    /// Zero-based offset of the first row on the current page.
    pub fn first_row_offset(&self) -> u64 {
        u64::from(self.page - 1) * self.page_size as u64
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total_records, self.page_size)
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::from_total(self.page, self.total_records, self.page_size)
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}
