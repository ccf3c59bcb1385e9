//! Pagination state and page-derived view.
//!
//! This module provides [`PageState`], the owner of the mutable
//! `(current_page, page_size)` pair, and [`visible_page`], the pure
//! derivation from a collection plus page state to the exact rows to
//! render. Pagination never errors: every transition and every lookup
//! clamps out-of-range values instead of failing.

/// Default number of rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Mutable pagination state: the 1-based current page and the page size.
///
/// Fields are private so the clamping invariant
/// `1 <= current_page <= max(1, total_pages)` can only be maintained,
/// never bypassed. All transitions report whether they changed the state
/// so callers can redraw only when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Create a new PageState at page 1.
    ///
    /// A `page_size` of 0 is coerced to 1; a page must be able to hold at
    /// least one row.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// The 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page, always at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Step back one page. Identity at page 1.
    ///
    /// Returns true if the page changed.
    pub fn go_prev(&mut self) -> bool {
        let old = self.current_page;
        self.current_page = (self.current_page - 1).max(1);
        old != self.current_page
    }

    /// Step forward one page, clamped to the last page.
    ///
    /// With `total_pages == 0` (empty collection) the clamp target is
    /// page 1, so the page counter can never reach 0.
    ///
    /// Returns true if the page changed.
    pub fn go_next(&mut self, total_pages: usize) -> bool {
        let old = self.current_page;
        self.current_page = (self.current_page + 1).min(total_pages.max(1));
        old != self.current_page
    }

    /// Jump directly to page `n`, clamped into `[1, max(1, total_pages)]`.
    ///
    /// Returns true if the page changed.
    pub fn go_to_page(&mut self, n: usize, total_pages: usize) -> bool {
        let old = self.current_page;
        self.current_page = n.clamp(1, total_pages.max(1));
        old != self.current_page
    }

    /// Re-clamp the current page after the collection changed size.
    ///
    /// Returns true if the page changed.
    pub fn clamp_to(&mut self, total_pages: usize) -> bool {
        let old = self.current_page;
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
        old != self.current_page
    }
}

/// Number of pages needed to show `len` rows at `page_size` rows per page.
///
/// Zero exactly when the collection is empty.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// The page-derived view consumed by the renderer.
///
/// Computed on demand from `(collection, PageState)` and never stored;
/// the collection itself stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    /// The contiguous slice of the collection visible on the current page
    pub rows: &'a [T],
    /// Total number of pages for the whole collection
    pub total_pages: usize,
    /// The 1-based page these rows belong to
    pub current_page: usize,
    /// Index into the full collection of the first visible row
    pub first_index: usize,
}

impl<T> PageView<'_, T> {
    /// The Prev control is enabled exactly when not on page 1.
    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    /// The Next control is enabled exactly when not on the last page.
    /// With no pages at all this is always false.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Derive the visible slice for the current page.
///
/// Total function: clamped-range slicing yields a partial page at the
/// end of the collection and an empty page when the collection is empty
/// or the page is out of range.
pub fn visible_page<'a, T>(records: &'a [T], state: &PageState) -> PageView<'a, T> {
    let first_index = (state.current_page() - 1) * state.page_size();
    let last_index = (first_index + state.page_size()).min(records.len());
    let rows = if first_index >= records.len() {
        &records[..0]
    } else {
        &records[first_index..last_index]
    };

    PageView {
        rows,
        total_pages: total_pages(records.len(), state.page_size()),
        current_page: state.current_page(),
        first_index,
    }
}
