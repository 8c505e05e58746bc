//! Page type for paginated results.

/// One page of results with the pagination information the API reported.
///
/// # Example
///
/// ```ignore
/// let page = client.fetch_artworks(1).await?;
///
/// for row in page.records() {
///     println!("{:?}", row.title);
/// }
///
/// if let Some(total) = page.total_count() {
///     println!("{} artworks in total", total);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    records: Vec<T>,
    /// `pagination.total`
    total_count: Option<u64>,
    /// `pagination.total_pages`
    total_pages: Option<u64>,
    /// `pagination.current_page`
    current_page: Option<u64>,
    /// `pagination.limit`
    limit: Option<u64>,
}

impl<T> Page<T> {
    /// Creates a new page with records and no pagination info.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            total_count: None,
            total_pages: None,
            current_page: None,
            limit: None,
        }
    }

    /// Sets the total record count.
    pub fn with_total_count(mut self, count: u64) -> Self {
        self.total_count = Some(count);
        self
    }

    /// Sets the total page count.
    pub fn with_total_pages(mut self, pages: u64) -> Self {
        self.total_pages = Some(pages);
        self
    }

    /// Sets the page number the API says it served.
    pub fn with_current_page(mut self, page: u64) -> Self {
        self.current_page = Some(page);
        self
    }

    /// Sets the page size the API used.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Returns the total record count across all pages, if reported.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Returns the total page count, if reported.
    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    /// Returns the served page number, if reported.
    pub fn current_page(&self) -> Option<u64> {
        self.current_page
    }

    /// Returns the upstream page size, if reported.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
