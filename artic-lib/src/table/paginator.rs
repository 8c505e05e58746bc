//! Page arithmetic for the table's paginator controls.

/// Default number of page links shown at once.
pub const DEFAULT_PAGE_LINK_SIZE: usize = 5;

/// Page position and count, with the first/prev/links/next/last controls.
///
/// Pages are 1-based. With zero pages every control points at page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: u32,
    page_count: u32,
}

impl Paginator {
    pub fn new(page: u32, page_count: u32) -> Self {
        Self { page, page_count }
    }

    /// Builds a paginator from a record total and page size.
    pub fn from_total(page: u32, total_records: u64, page_size: usize) -> Self {
        Self::new(page, page_count(total_records, page_size))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn first(&self) -> u32 {
        1
    }

    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        self.page.saturating_add(1).min(self.last())
    }

    pub fn last(&self) -> u32 {
        self.page_count.max(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.page < self.page_count
    }

    /// Clamps a requested page into `1..=last`.
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.last())
    }

    /// Page numbers for the page-link window, centred on the current page
    /// where possible and never longer than `link_size`.
    pub fn page_links(&self, link_size: usize) -> Vec<u32> {
        let count = u64::from(self.page_count);
        let visible = (link_size as u64).min(count);
        if visible == 0 {
            return Vec::new();
        }

        let page = u64::from(self.page).clamp(1, count);
        let mut start = page.saturating_sub(visible / 2).max(1);
        let mut end = start + (visible - 1);
        if end > count {
            end = count;
            start = end + 1 - visible;
        }
        // Both bounds are <= page_count, which is a u32.
        (start..=end).filter_map(|p| u32::try_from(p).ok()).collect()
    }
}

/// Number of pages needed to show `total_records` at `page_size` per page.
pub fn page_count(total_records: u64, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_records.div_ceil(page_size as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(50, 12), 5);
        assert_eq!(page_count(48, 12), 4);
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn test_navigation_targets() {
        let p = Paginator::from_total(1, 50, 12);
        assert_eq!((p.first(), p.prev(), p.next(), p.last()), (1, 1, 2, 5));
        assert!(!p.can_go_back());
        assert!(p.can_go_forward());

        let p = Paginator::new(5, 5);
        assert_eq!((p.prev(), p.next()), (4, 5));
        assert!(!p.can_go_forward());
    }

    #[test]
    fn test_empty_total_points_at_page_one() {
        let p = Paginator::from_total(1, 0, 12);
        assert_eq!((p.next(), p.last()), (1, 1));
        assert_eq!(p.clamp(7), 1);
        assert!(p.page_links(5).is_empty());
    }

    #[test]
    fn test_page_links_window() {
        assert_eq!(Paginator::new(1, 20).page_links(5), vec![1, 2, 3, 4, 5]);
        assert_eq!(Paginator::new(10, 20).page_links(5), vec![8, 9, 10, 11, 12]);
        assert_eq!(Paginator::new(20, 20).page_links(5), vec![16, 17, 18, 19, 20]);
        assert_eq!(Paginator::new(2, 3).page_links(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_links_at_u32_limit() {
        let max = u32::MAX;
        let p = Paginator::from_total(max, u64::MAX, 12);
        assert_eq!(p.page_count(), max);
        assert_eq!(p.page_links(5), vec![max - 4, max - 3, max - 2, max - 1, max]);
        assert_eq!(p.next(), max);
        assert_eq!(Paginator::new(max - 1, max).page_links(5).last(), Some(&max));
    }
}
