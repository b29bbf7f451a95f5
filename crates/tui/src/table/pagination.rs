//! Page index and page size over the filtered rows.

use std::ops::Range;

use datagrid_config::constants::{DEFAULT_PAGE_SIZE, MAX_PAGES_TO_SHOW, PAGE_SIZE_OPTIONS};

/// Zero-based page index plus the rows-per-page choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Start on the first page; sizes outside the options fall back to
    /// the default.
    pub fn new(page_size: usize) -> Self {
        let mut pagination = Self::default();
        pagination.set_page_size(page_size);
        pagination
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Switch rows per page and return to the first page. Sizes outside
    /// the option list are ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            tracing::debug!(page_size, "Ignoring page size outside the option list");
            return false;
        }
        self.page_size = page_size;
        self.page_index = 0;
        true
    }

    /// Move to the next (or previous) page size option, wrapping around.
    pub fn cycle_page_size(&mut self, forward: bool) {
        let len = PAGE_SIZE_OPTIONS.len();
        let current = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_page_size(PAGE_SIZE_OPTIONS[next]);
    }

    /// Number of pages for `total` rows; zero rows means zero pages.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    pub fn last(&mut self, total: usize) {
        self.page_index = self.page_count(total).saturating_sub(1);
    }

    /// Jump to a one-based page number. Out-of-range numbers are ignored.
    pub fn go_to(&mut self, page: usize, total: usize) -> bool {
        if page == 0 || page > self.page_count(total) {
            return false;
        }
        self.page_index = page - 1;
        true
    }

    /// Keep the index on an existing page after the row count changed.
    pub fn clamp(&mut self, total: usize) {
        let last = self.page_count(total).saturating_sub(1);
        self.page_index = self.page_index.min(last);
    }

    /// Row positions covered by the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// One-based page numbers shown in the paginator.
    ///
    /// At most `MAX_PAGES_TO_SHOW` consecutive pages, centred on the
    /// current page where possible and clamped to `[1, page_count]`.
    pub fn page_window(&self, total: usize) -> Vec<usize> {
        let pages = self.page_count(total);
        if pages == 0 {
            return Vec::new();
        }
        let current = self.page_index + 1;
        let half = MAX_PAGES_TO_SHOW / 2;
        let latest_start = pages.saturating_sub(MAX_PAGES_TO_SHOW) + 1;
        let start = current.saturating_sub(half).min(latest_start).max(1);
        let end = (start + MAX_PAGES_TO_SHOW - 1).min(pages);
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_size_is_ignored() {
        let mut pagination = Pagination::new(7);
        assert_eq!(pagination.page_size(), DEFAULT_PAGE_SIZE);
        assert!(!pagination.set_page_size(12));
        assert!(pagination.set_page_size(15));
        assert_eq!(pagination.page_size(), 15);
    }

    #[test]
    fn test_set_page_size_resets_index() {
        let mut pagination = Pagination::new(5);
        pagination.last(42);
        assert_eq!(pagination.page_index(), 8);
        pagination.set_page_size(10);
        assert_eq!(pagination.page_index(), 0);
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut pagination = Pagination::new(5);
        pagination.previous();
        assert_eq!(pagination.page_index(), 0);
        assert!(!pagination.can_previous());

        pagination.last(12);
        assert_eq!(pagination.page_index(), 2);
        assert!(!pagination.can_next(12));
        pagination.next(12);
        assert_eq!(pagination.page_index(), 2);
        assert_eq!(pagination.range(12), 10..12);
    }

    #[test]
    fn test_go_to_is_one_based() {
        let mut pagination = Pagination::new(5);
        assert!(pagination.go_to(2, 12));
        assert_eq!(pagination.page_index(), 1);
        assert!(!pagination.go_to(0, 12));
        assert!(!pagination.go_to(4, 12));
        assert_eq!(pagination.page_index(), 1);
    }

    #[test]
    fn test_empty_table_has_no_pages() {
        let mut pagination = Pagination::new(5);
        assert_eq!(pagination.page_count(0), 0);
        assert!(pagination.page_window(0).is_empty());
        pagination.last(0);
        assert_eq!(pagination.page_index(), 0);
        assert_eq!(pagination.range(0), 0..0);
    }

    #[test]
    fn test_page_window_centres_on_current_page() {
        let mut pagination = Pagination::new(5);
        let total = 50;
        assert_eq!(pagination.page_window(total), vec![1, 2, 3, 4, 5]);
        pagination.go_to(6, total);
        assert_eq!(pagination.page_window(total), vec![4, 5, 6, 7, 8]);
        pagination.last(total);
        assert_eq!(pagination.page_window(total), vec![6, 7, 8, 9, 10]);
        assert_eq!(pagination.page_window(12), vec![1, 2, 3]);
    }

    #[test]
    fn test_cycle_page_size_wraps() {
        let mut pagination = Pagination::new(15);
        pagination.cycle_page_size(true);
        assert_eq!(pagination.page_size(), 5);
        pagination.cycle_page_size(false);
        assert_eq!(pagination.page_size(), 15);
    }
}
