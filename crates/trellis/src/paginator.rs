//! Pagination state and display.
//!
//! The paginator tracks the current page and derives the page count from
//! a total record count. It holds no data: the grid receives one page of
//! pre-fetched rows at a time and never slices a collection itself.
//!
//! # Example
//!
//! ```rust
//! use trellis::paginator::Paginator;
//!
//! let mut paginator = Paginator::new().per_page(10);
//! paginator.set_total_pages_from_items(23);
//! assert_eq!(paginator.get_total_pages(), 3);
//!
//! paginator.next_page();
//! assert_eq!(paginator.page(), 1);
//! ```

/// Pagination display type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Arabic numerals: "1/5"
    #[default]
    Arabic,
    /// Dot indicators: "●○○○○"
    Dots,
}

/// Pagination model.
#[derive(Debug, Clone)]
pub struct Paginator {
    /// Display type (Arabic or Dots).
    pub display_type: Type,
    /// Current page (0-indexed).
    page: usize,
    /// Items per page.
    per_page: usize,
    /// Total number of pages.
    total_pages: usize,
    /// Character for active page in Dots mode.
    pub active_dot: String,
    /// Character for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// Format string for Arabic mode.
    pub arabic_format: String,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Creates a new paginator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_type: Type::Arabic,
            page: 0,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "{}/{}".to_string(),
        }
    }

    /// Sets the display type.
    #[must_use]
    pub fn display_type(mut self, t: Type) -> Self {
        self.display_type = t;
        self
    }

    /// Sets the number of items per page.
    #[must_use]
    pub fn per_page(mut self, n: usize) -> Self {
        self.per_page = n.max(1);
        self
    }

    /// Returns the current page (0-indexed).
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Sets the current page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    /// Returns the items per page.
    #[must_use]
    pub fn get_per_page(&self) -> usize {
        self.per_page
    }

    /// Sets the items per page (minimum 1).
    pub fn set_per_page(&mut self, n: usize) {
        self.per_page = n.max(1);
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn get_total_pages(&self) -> usize {
        self.total_pages
    }

    /// Calculates and sets the total pages from a record count.
    ///
    /// The count is re-derived from every data snapshot, so zero records
    /// collapse to a single (empty) page rather than keeping a stale
    /// count. The current page is clamped into the new range.
    ///
    /// Returns the calculated total pages.
    pub fn set_total_pages_from_items(&mut self, items: usize) -> usize {
        let mut n = items / self.per_page;
        if items == 0 || items % self.per_page > 0 {
            n += 1;
        }
        self.total_pages = n;
        self.page = self.page.min(n - 1);
        n
    }

    /// Navigates to the previous page.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Navigates to the next page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns whether we're on the last page.
    #[must_use]
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// Returns whether we're on the first page.
    #[must_use]
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Renders the pagination display.
    #[must_use]
    pub fn view(&self) -> String {
        match self.display_type {
            Type::Dots => self.dots_view(),
            Type::Arabic => self.arabic_view(),
        }
    }

    fn dots_view(&self) -> String {
        let mut s = String::new();
        for i in 0..self.total_pages {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
        }
        s
    }

    fn arabic_view(&self) -> String {
        // Replace first {} with current page, second {} with total pages
        self.arabic_format
            .replacen("{}", &(self.page + 1).to_string(), 1)
            .replacen("{}", &self.total_pages.to_string(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginator_new() {
        let p = Paginator::new();
        assert_eq!(p.page(), 0);
        assert_eq!(p.get_per_page(), 1);
        assert_eq!(p.get_total_pages(), 1);
    }

    #[test]
    fn test_paginator_navigation() {
        let mut p = Paginator::new().per_page(1);
        p.set_total_pages_from_items(5);

        assert!(p.on_first_page());
        assert!(!p.on_last_page());

        p.next_page();
        assert_eq!(p.page(), 1);

        p.next_page();
        p.next_page();
        p.next_page();
        assert_eq!(p.page(), 4);
        assert!(p.on_last_page());

        // Should not go past last page
        p.next_page();
        assert_eq!(p.page(), 4);

        p.prev_page();
        assert_eq!(p.page(), 3);

        p.set_page(0);
        assert!(p.on_first_page());

        // Should not go before first page
        p.prev_page();
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_ceil_division_page_count() {
        let mut p = Paginator::new().per_page(10);

        assert_eq!(p.set_total_pages_from_items(23), 3);
        assert_eq!(p.set_total_pages_from_items(20), 2);
        assert_eq!(p.set_total_pages_from_items(1), 1);
    }

    #[test]
    fn test_zero_items_single_page() {
        let mut p = Paginator::new().per_page(10);
        p.set_total_pages_from_items(23);
        p.set_page(2);

        assert_eq!(p.set_total_pages_from_items(0), 1);
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_page_clamped_on_shrink() {
        let mut p = Paginator::new().per_page(10);
        p.set_total_pages_from_items(23);
        p.set_page(2);

        // Deleting down to 11 records leaves 2 pages; the page pointer
        // follows the shrink.
        p.set_total_pages_from_items(11);
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_arabic_view() {
        let mut p = Paginator::new().per_page(10);
        p.set_total_pages_from_items(45);
        assert_eq!(p.view(), "1/5");

        p.next_page();
        assert_eq!(p.view(), "2/5");
    }

    #[test]
    fn test_dots_view() {
        let mut p = Paginator::new().per_page(1).display_type(Type::Dots);
        p.set_total_pages_from_items(5);
        assert_eq!(p.view(), "•○○○○");

        p.next_page();
        assert_eq!(p.view(), "○•○○○");
    }
}
