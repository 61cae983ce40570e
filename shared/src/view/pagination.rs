//! Pagination window
//!
//! Every admin table shows at most [`VISIBLE_PAGES`] page buttons, centered
//! on the current page and clamped at both ends, plus prev/next controls.

use serde::Serialize;

use crate::response::PageMeta;

/// Number of page buttons shown at once
pub const VISIBLE_PAGES: u32 = 5;

/// Page buttons to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub current: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Visible page numbers for `current` out of `total_pages`
///
/// ```
/// use shared::view::pagination::visible_pages;
///
/// assert_eq!(visible_pages(1, 20), vec![1, 2, 3, 4, 5]);
/// assert_eq!(visible_pages(10, 20), vec![8, 9, 10, 11, 12]);
/// assert_eq!(visible_pages(20, 20), vec![16, 17, 18, 19, 20]);
/// ```
pub fn visible_pages(current: u32, total_pages: u32) -> Vec<u32> {
    window(current, total_pages, VISIBLE_PAGES)
}

/// Window of at most `size` pages around `current`
pub fn window(current: u32, total_pages: u32, size: u32) -> Vec<u32> {
    if total_pages == 0 || size == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let size = size.min(total_pages);
    let half = size / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total_pages - size + 1);
    (start..start + size).collect()
}

/// Pagination state of one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32, total_items: u64, per_page: u32) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            per_page,
        }
    }

    /// Current page clamped into `1..=total_pages` (1 for an empty table)
    pub fn current(&self) -> u32 {
        self.current_page.clamp(1, self.total_pages.max(1))
    }

    pub fn has_prev(&self) -> bool {
        self.current() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current() < self.total_pages
    }

    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.current() - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current() + 1)
    }

    /// Resolve a page-change request; `None` when it would leave the range
    /// or not change anything.
    pub fn go_to(&self, page: u32) -> Option<u32> {
        (page >= 1 && page <= self.total_pages && page != self.current()).then_some(page)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            pages: visible_pages(self.current(), self.total_pages),
            current: self.current(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    /// 1-based inclusive range of items on the current page, `None` when empty
    pub fn item_range(&self) -> Option<(u64, u64)> {
        if self.total_items == 0 || self.per_page == 0 {
            return None;
        }
        let per_page = u64::from(self.per_page);
        let first = u64::from(self.current() - 1) * per_page + 1;
        if first > self.total_items {
            return None;
        }
        let last = (first + per_page - 1).min(self.total_items);
        Some((first, last))
    }

    /// e.g. `Menampilkan 11–20 dari 42 data`
    pub fn summary(&self) -> String {
        match self.item_range() {
            Some((first, last)) => {
                format!("Menampilkan {}–{} dari {} data", first, last, self.total_items)
            }
            None => "Tidak ada data".to_string(),
        }
    }
}

impl From<PageMeta> for Pagination {
    fn from(meta: PageMeta) -> Self {
        Self::new(meta.page, meta.total_pages, meta.total, meta.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_edges_and_middle() {
        assert_eq!(visible_pages(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(20, 20), vec![16, 17, 18, 19, 20]);
        assert_eq!(visible_pages(10, 20), vec![8, 9, 10, 11, 12]);
        assert_eq!(visible_pages(2, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(19, 20), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_window_small_totals() {
        assert!(visible_pages(1, 0).is_empty());
        assert_eq!(visible_pages(1, 1), vec![1]);
        assert_eq!(visible_pages(3, 3), vec![1, 2, 3]);
        assert_eq!(visible_pages(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(3, 6), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(4, 6), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_clamps_out_of_range_current() {
        assert_eq!(visible_pages(0, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(99, 20), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_even_window_size() {
        assert_eq!(window(5, 10, 4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_prev_next_disabled_at_boundaries() {
        let first = Pagination::new(1, 3, 25, 10);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.prev(), None);

        let last = Pagination::new(3, 3, 25, 10);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let empty = Pagination::new(1, 0, 0, 10);
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
        assert!(empty.window().pages.is_empty());
    }

    #[test]
    fn test_go_to() {
        let p = Pagination::new(2, 5, 50, 10);
        assert_eq!(p.go_to(4), Some(4));
        assert_eq!(p.go_to(2), None);
        assert_eq!(p.go_to(0), None);
        assert_eq!(p.go_to(6), None);
    }

    #[test]
    fn test_item_range_and_summary() {
        let p = Pagination::new(3, 3, 25, 10);
        assert_eq!(p.item_range(), Some((21, 25)));
        assert_eq!(p.summary(), "Menampilkan 21–25 dari 25 data");

        let empty = Pagination::new(1, 0, 0, 10);
        assert_eq!(empty.item_range(), None);
        assert_eq!(empty.summary(), "Tidak ada data");
    }

    #[test]
    fn test_from_meta() {
        let p: Pagination = PageMeta::new(2, 10, 42).into();
        assert_eq!(p.total_pages, 5);
        assert_eq!(p.window().pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(p.item_range(), Some((11, 20)));
    }
}
