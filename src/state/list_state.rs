//! Record list state: snapshot, filtered view, page cursor.
//!
//! The snapshot is replaced wholesale on every fetch. The filtered view is a
//! list of indices into the snapshot and is recomputed synchronously whenever
//! the term or the snapshot changes.

use crate::model::{AidError, AidId, AidRecord};
use crate::state::filter::{self, FilterTerm};
use crate::state::paginator::{self, PageMeta, PageWindow};
use std::num::NonZeroUsize;

/// Default rows per page.
pub const DEFAULT_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Page sizes offered by the page-size selector, in cycle order.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Validate a configured or typed page size.
pub fn parse_per_page(n: usize) -> Result<NonZeroUsize, AidError> {
    NonZeroUsize::new(n).ok_or_else(|| AidError::validation("page size must be at least 1"))
}

/// Next entry of [`PAGE_SIZES`] after `current`, wrapping around.
///
/// A size not in the list (e.g. from config) cycles to the first larger one.
pub fn next_page_size(current: NonZeroUsize) -> NonZeroUsize {
    let next = PAGE_SIZES
        .iter()
        .copied()
        .find(|&n| n > current.get())
        .unwrap_or(PAGE_SIZES[0]);
    NonZeroUsize::new(next).unwrap_or(DEFAULT_PER_PAGE)
}

/// Filterable, paginated view over one record partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    items: Vec<AidRecord>,
    filtered: Vec<usize>,
    term: FilterTerm,
    raw_term: String,
    page: usize,
    per_page: NonZeroUsize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl ListState {
    /// Empty list on page 1.
    pub fn new(per_page: NonZeroUsize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            term: FilterTerm::default(),
            raw_term: String::new(),
            page: 1,
            per_page,
        }
    }

    /// Replace the snapshot, re-apply the current term, go to page 1.
    pub fn load(&mut self, items: Vec<AidRecord>) {
        self.items = items;
        self.refilter();
        self.page = 1;
    }

    /// Set the filter term, recompute the view, go to page 1.
    pub fn set_filter(&mut self, term: &str) {
        self.raw_term = term.to_string();
        self.term = FilterTerm::new(term);
        self.refilter();
        self.page = 1;
    }

    /// Go to page `n`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, n: usize) {
        self.page = paginator::clamp_page(n, self.total_pages());
    }

    /// Change the page size and go to page 1.
    pub fn set_per_page(&mut self, per_page: NonZeroUsize) {
        self.per_page = per_page;
        self.page = 1;
    }

    /// Rows of the current page and their display bounds.
    pub fn current_slice(&self) -> (Vec<&AidRecord>, PageMeta) {
        let meta = paginator::page_meta(self.filtered.len(), self.page, self.per_page);
        let range = paginator::page_range(self.filtered.len(), self.page, self.per_page);
        let rows = self.filtered[range]
            .iter()
            .map(|&i| &self.items[i])
            .collect();
        (rows, meta)
    }

    /// Page-link window for the current page.
    pub fn window(&self) -> PageWindow {
        paginator::page_window(self.filtered.len(), self.page, self.per_page)
    }

    /// Remove a record by id, keeping the term and clamping the page.
    ///
    /// Returns the removed record, or `None` if it was not in the snapshot.
    pub fn remove(&mut self, id: &AidId) -> Option<AidRecord> {
        let pos = self.items.iter().position(|r| &r.id == id)?;
        let removed = self.items.remove(pos);
        self.refilter();
        self.set_page(self.page);
        Some(removed)
    }

    /// Add a record, keeping the term and the current page.
    pub fn insert(&mut self, record: AidRecord) {
        self.items.push(record);
        self.refilter();
        self.set_page(self.page);
    }

    fn refilter(&mut self) {
        self.filtered = filter::apply(&self.items, &self.term);
    }

    /// Full snapshot in fetch order.
    pub fn items(&self) -> &[AidRecord] {
        &self.items
    }

    /// Filtered, sorted records.
    pub fn filtered(&self) -> impl Iterator<Item = &AidRecord> + '_ {
        self.filtered.iter().map(|&i| &self.items[i])
    }

    /// Number of filtered records.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether the snapshot holds a record with this id.
    pub fn contains(&self, id: &AidId) -> bool {
        self.items.iter().any(|r| &r.id == id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: &AidId) -> Option<&AidRecord> {
        self.items.iter().find(|r| &r.id == id)
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn per_page(&self) -> NonZeroUsize {
        self.per_page
    }

    /// `max(1, ceil(filtered / per_page))`.
    pub fn total_pages(&self) -> usize {
        paginator::total_pages(self.filtered.len(), self.per_page)
    }

    /// Filter term as the admin typed it.
    pub fn term(&self) -> &str {
        &self.raw_term
    }
}

#[cfg(test)]
#[path = "list_state_tests.rs"]
mod tests;
