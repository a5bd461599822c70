//! Text filtering and recency sort over a record snapshot (pure).
//!
//! Results are index lists into the snapshot so the snapshot itself is never
//! reordered or copied.

use crate::model::AidRecord;
use std::cmp::Ordering;

/// Normalized filter term.
///
/// Trimmed and lowercased once; an empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTerm(String);

impl FilterTerm {
    /// Normalize raw input.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Whether this term matches every record.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match on beneficiary name or id.
    pub fn matches(&self, record: &AidRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        record.beneficiary_name.to_lowercase().contains(&self.0)
            || record
                .beneficiary_id
                .as_str()
                .to_lowercase()
                .contains(&self.0)
    }
}

/// Filter `items` by `term`, then sort by recency.
///
/// Returns indices into `items`.
pub fn apply(items: &[AidRecord], term: &FilterTerm) -> Vec<usize> {
    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, r)| term.matches(r))
        .map(|(i, _)| i)
        .collect();
    sort_by_recency(items, &mut indices);
    indices
}

/// Stable sort, most recent date first.
///
/// When no item in the snapshot carries a date the order is left alone.
/// Otherwise undated rows sink below dated ones, keeping their relative order.
pub fn sort_by_recency(items: &[AidRecord], indices: &mut [usize]) {
    if !items.iter().any(|r| r.scheduled_date.is_some()) {
        return;
    }
    indices.sort_by(|&a, &b| {
        match (items[a].scheduled_date, items[b].scheduled_date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
