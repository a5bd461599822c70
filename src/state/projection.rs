//! Pure projection from page state to renderable rows.
//!
//! The terminal widgets only ever see [`ListView`]; they never reach into
//! [`AidPage`] directly.

use crate::model::{category_of, AidRecord};
use crate::state::aid_page::{AidPage, Partition};
use crate::state::paginator::{PageMeta, PageWindow};

/// One table row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Aid id, used to address the row.
    pub aid_id: String,
    /// Beneficiary name, or `-` when the service sent none.
    pub name: String,
    /// Beneficiary id.
    pub beneficiary_id: String,
    /// Aid kind as stored.
    pub kind: String,
    /// Short category name for the kind, empty when uncategorised.
    pub category: &'static str,
    /// `YYYY-MM-DD` or `-`.
    pub date: String,
    /// Aid source, or `-`.
    pub source: String,
    /// Completion call outstanding for this row.
    pub in_flight: bool,
}

/// Everything needed to draw one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Partition shown.
    pub partition: Partition,
    /// Rows of the current page.
    pub rows: Vec<RowView>,
    /// Display bounds of the current page.
    pub meta: PageMeta,
    /// Page-link bar.
    pub window: PageWindow,
    /// Search term as typed.
    pub term: String,
    /// Rows per page.
    pub per_page: usize,
    /// Whether the bulk control should be offered.
    pub bulk_enabled: bool,
}

impl ListView {
    /// "Showing start–end of total".
    pub fn summary(&self) -> String {
        format!(
            "Showing {}–{} of {}",
            self.meta.start, self.meta.end, self.meta.total
        )
    }
}

/// Consumer of projected lists.
///
/// The terminal UI is one implementation; tests use a recording sink.
pub trait PresentationSink {
    /// Draw one partition.
    fn render(&mut self, view: &ListView);
}

fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

fn row(page: &AidPage, record: &AidRecord) -> RowView {
    RowView {
        aid_id: record.id.as_str().to_string(),
        name: or_dash(&record.beneficiary_name),
        beneficiary_id: record.beneficiary_id.as_str().to_string(),
        kind: or_dash(&record.kind),
        category: category_of(&record.kind).map_or("", |c| c.short_name()),
        date: record.display_date(),
        source: or_dash(&record.source),
        in_flight: page.is_completing(&record.id),
    }
}

/// Project one partition of the page.
pub fn project(page: &AidPage, partition: Partition) -> ListView {
    let list = page.list(partition);
    let (records, meta) = list.current_slice();
    ListView {
        partition,
        rows: records.into_iter().map(|r| row(page, r)).collect(),
        meta,
        window: list.window(),
        term: list.term().to_string(),
        per_page: list.per_page().get(),
        bulk_enabled: partition == Partition::Future && !page.is_bulk_in_flight(),
    }
}

/// Project both partitions into a sink.
pub fn render_into(page: &AidPage, sink: &mut impl PresentationSink) {
    for partition in [Partition::Future, Partition::Completed] {
        sink.render(&project(page, partition));
    }
}
