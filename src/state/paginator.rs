//! Pagination math (pure).
//!
//! Pages are 1-based. There is always at least one page so an empty list can
//! still render its empty-state row.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Radius of the sliding page-link window around the current page.
pub const WINDOW_RADIUS: usize = 2;

/// Display bounds for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// 1-based index of the first row shown, `0` when the list is empty.
    pub start: usize,
    /// 1-based index of the last row shown, `min(page * per_page, total)`.
    pub end: usize,
    /// Number of filtered rows.
    pub total: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Current page after clamping.
    pub page: usize,
}

/// One entry of the page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// A clickable page number.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the current page.
        current: bool,
    },
    /// A gap between the window and the first or last page.
    Ellipsis,
}

/// Page-link bar with its previous/next affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Links in display order.
    pub links: Vec<PageLink>,
    /// Previous is enabled iff `page > 1`.
    pub prev_enabled: bool,
    /// Next is enabled iff `page < total_pages`.
    pub next_enabled: bool,
}

/// `max(1, ceil(len / per_page))`.
pub fn total_pages(len: usize, per_page: NonZeroUsize) -> usize {
    len.div_ceil(per_page.get()).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the rows on `page`. Empty when the list is empty.
pub fn page_range(len: usize, page: usize, per_page: NonZeroUsize) -> Range<usize> {
    let page = clamp_page(page, total_pages(len, per_page));
    let start = ((page - 1) * per_page.get()).min(len);
    let end = (page * per_page.get()).min(len);
    start..end
}

/// Display bounds for `page`.
pub fn page_meta(len: usize, page: usize, per_page: NonZeroUsize) -> PageMeta {
    let total_pages = total_pages(len, per_page);
    let page = clamp_page(page, total_pages);
    let range = page_range(len, page, per_page);
    PageMeta {
        start: if len == 0 { 0 } else { range.start + 1 },
        end: range.end,
        total: len,
        total_pages,
        page,
    }
}

/// Page-link window: current page ± [`WINDOW_RADIUS`], plus first and last
/// page with an ellipsis where the window does not reach them.
pub fn page_window(len: usize, page: usize, per_page: NonZeroUsize) -> PageWindow {
    let total = total_pages(len, per_page);
    let page = clamp_page(page, total);
    let first = page.saturating_sub(WINDOW_RADIUS).max(1);
    let last = (page + WINDOW_RADIUS).min(total);

    let mut links = Vec::with_capacity(last - first + 5);
    if first > 1 {
        links.push(PageLink::Page {
            number: 1,
            current: false,
        });
        if first > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    for number in first..=last {
        links.push(PageLink::Page {
            number,
            current: number == page,
        });
    }
    if last < total {
        if last < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page {
            number: total,
            current: false,
        });
    }

    PageWindow {
        links,
        prev_enabled: page > 1,
        next_enabled: page < total,
    }
}

#[cfg(test)]
#[path = "paginator_tests.rs"]
mod tests;
