use serde::Serialize;

/// Fixed per-page-type pagination settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paginator {
    pub page_size: usize,
    /// Maximum number of page buttons shown at once.
    pub window: usize,
}

/// Article listings (posts, policy news).
pub const ARTICLES: Paginator = Paginator {
    page_size: 10,
    window: 10,
};

/// Travel grid.
pub const TRAVEL: Paginator = Paginator {
    page_size: 12,
    window: 5,
};

/// Everything the pagination widget needs to render itself, plus the item
/// range of the requested page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Item index range `[start, end)` of the current page.
    pub start: usize,
    pub end: usize,
    /// The windowed page-number buttons, always containing `current_page`.
    pub window_pages: Vec<usize>,
    /// Explicit first/last buttons when the window does not reach them.
    pub show_first: bool,
    pub leading_ellipsis: bool,
    pub show_last: bool,
    pub trailing_ellipsis: bool,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Paginator {
    /// Compute page metadata for a collection of `total_items`, clamping the
    /// requested page into range instead of rejecting it.
    pub fn paginate(&self, total_items: usize, requested_page: usize) -> PageInfo {
        // "page 1 of 1" stays well-defined for an empty collection
        let total_pages = std::cmp::max(1, total_items.div_ceil(self.page_size));
        let current_page = requested_page.clamp(1, total_pages);

        let start = (current_page - 1) * self.page_size;
        let end = std::cmp::min(start + self.page_size, total_items);
        let start = std::cmp::min(start, total_items);

        let mut window_start = current_page.saturating_sub(self.window / 2).max(1);
        let window_end = std::cmp::min(total_pages, window_start + self.window - 1);
        if window_end - window_start + 1 < self.window {
            window_start = window_end.saturating_sub(self.window - 1).max(1);
        }
        let window_pages: Vec<usize> = (window_start..=window_end).collect();

        PageInfo {
            current_page,
            total_pages,
            total_items,
            start,
            end,
            show_first: window_start > 1,
            leading_ellipsis: window_start > 2,
            show_last: window_end < total_pages,
            trailing_ellipsis: window_end < total_pages.saturating_sub(1),
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
            window_pages,
        }
    }

    /// Paginate and return the page's slice alongside the metadata.
    pub fn slice<'a, T>(&self, items: &'a [T], requested_page: usize) -> (&'a [T], PageInfo) {
        let info = self.paginate(items.len(), requested_page);
        (&items[info.start..info.end], info)
    }
}
