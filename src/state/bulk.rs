//! Bulk completion planning (pure).
//!
//! The batch is scoped to the *filtered* Future view, so an active search
//! narrows what gets completed. The exception list is not a plain skip list:
//! every listed beneficiary is sent for deletion.

use crate::model::{AidError, AidRecord, BeneficiaryId};
use std::collections::HashSet;

/// What a bulk call will ask the service to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkPlan {
    /// Beneficiaries whose Future records become Completed: `F − E`.
    pub complete: Vec<BeneficiaryId>,
    /// Beneficiaries whose records are removed outright: `E`.
    pub delete: Vec<BeneficiaryId>,
}

impl BulkPlan {
    /// Whether the plan would do nothing.
    pub fn is_empty(&self) -> bool {
        self.complete.is_empty() && self.delete.is_empty()
    }
}

/// Parse the exception textbox: one beneficiary id per line.
///
/// Blank lines and surrounding whitespace are dropped, duplicates collapse to
/// their first occurrence. A line holding several whitespace-separated ids
/// contributes each of them.
pub fn parse_exceptions(text: &str) -> Vec<BeneficiaryId> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter_map(|token| BeneficiaryId::new(token).ok())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Build the plan for the given filtered Future records and exception text.
///
/// Fails with [`AidError::NoOp`] when there is nothing to complete and
/// nothing to delete, before any remote call is made.
pub fn plan_bulk<'a>(
    filtered_future: impl IntoIterator<Item = &'a AidRecord>,
    exception_text: &str,
) -> Result<BulkPlan, AidError> {
    let delete = parse_exceptions(exception_text);
    let excluded: HashSet<&BeneficiaryId> = delete.iter().collect();

    let mut seen = HashSet::new();
    let complete: Vec<BeneficiaryId> = filtered_future
        .into_iter()
        .map(|r| &r.beneficiary_id)
        .filter(|id| !excluded.contains(id))
        .filter(|id| seen.insert(*id))
        .cloned()
        .collect();

    let plan = BulkPlan { complete, delete };
    if plan.is_empty() {
        return Err(AidError::NoOp);
    }
    Ok(plan)
}

#[cfg(test)]
#[path = "bulk_tests.rs"]
mod tests;
