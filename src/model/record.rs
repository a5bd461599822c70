//! Canonical aid record.
//!
//! Everything past ingestion reads these fields only; upstream aliases are
//! resolved once in [`crate::model::ingest`].

use crate::model::{AidId, BeneficiaryId};
use chrono::NaiveDate;
use std::fmt;

/// Delivery status of an aid record.
///
/// `Future → Completed` is the only transition and it is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AidStatus {
    /// Scheduled but not yet delivered.
    Future,
    /// Delivered.
    Completed,
}

impl AidStatus {
    /// Wire name used by the remote service.
    pub fn as_str(self) -> &'static str {
        match self {
            AidStatus::Future => "Future",
            AidStatus::Completed => "Completed",
        }
    }

    /// Parse a wire status. Surrounding whitespace is ignored, case is not.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Future" => Some(AidStatus::Future),
            "Completed" => Some(AidStatus::Completed),
            _ => None,
        }
    }

    /// Whether a transition from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: AidStatus) -> bool {
        matches!((self, next), (AidStatus::Future, AidStatus::Completed))
    }
}

impl fmt::Display for AidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single aid disbursement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AidRecord {
    /// Record id, used for single-record status updates.
    pub id: AidId,
    /// Beneficiary the aid is issued to, used by the bulk workflow.
    pub beneficiary_id: BeneficiaryId,
    /// Display name of the beneficiary. May be empty.
    pub beneficiary_name: String,
    /// Aid sub-type, an open string from the category taxonomy.
    pub kind: String,
    /// Current delivery status.
    pub status: AidStatus,
    /// Scheduled or delivery date, when one could be parsed.
    pub scheduled_date: Option<NaiveDate>,
    /// Funding or distributing source.
    pub source: String,
    /// Free-form notes.
    pub notes: String,
}

impl AidRecord {
    /// Minimal record with empty descriptive fields.
    pub fn new(id: AidId, beneficiary_id: BeneficiaryId, status: AidStatus) -> Self {
        Self {
            id,
            beneficiary_id,
            beneficiary_name: String::new(),
            kind: String::new(),
            status,
            scheduled_date: None,
            source: String::new(),
            notes: String::new(),
        }
    }

    /// Builder-style setter for the beneficiary name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.beneficiary_name = name.into();
        self
    }

    /// Builder-style setter for the aid kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder-style setter for the scheduled date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// Builder-style setter for the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Copy of this record after the `Future → Completed` transition.
    ///
    /// Returns `None` when the record is already completed.
    pub fn completed(&self) -> Option<Self> {
        if !self.status.can_transition_to(AidStatus::Completed) {
            return None;
        }
        let mut next = self.clone();
        next.status = AidStatus::Completed;
        Some(next)
    }

    /// Date rendered as `YYYY-MM-DD`, or `-` when absent.
    pub fn display_date(&self) -> String {
        self.scheduled_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: AidStatus) -> AidRecord {
        AidRecord::new(
            AidId::new("1").unwrap(),
            BeneficiaryId::new("900").unwrap(),
            status,
        )
    }

    #[test]
    fn status_parse_trims_whitespace() {
        assert_eq!(AidStatus::parse(" Future "), Some(AidStatus::Future));
        assert_eq!(AidStatus::parse("Completed\n"), Some(AidStatus::Completed));
        assert_eq!(AidStatus::parse("future"), None);
        assert_eq!(AidStatus::parse("Cancelled"), None);
    }

    #[test]
    fn only_future_to_completed_is_allowed() {
        assert!(AidStatus::Future.can_transition_to(AidStatus::Completed));
        assert!(!AidStatus::Completed.can_transition_to(AidStatus::Future));
        assert!(!AidStatus::Future.can_transition_to(AidStatus::Future));
        assert!(!AidStatus::Completed.can_transition_to(AidStatus::Completed));
    }

    #[test]
    fn completed_copy_flips_status_once() {
        let future = record(AidStatus::Future);
        let done = future.completed().expect("future record completes");
        assert_eq!(done.status, AidStatus::Completed);
        assert_eq!(done.id, future.id);
        assert!(done.completed().is_none(), "completed is terminal");
    }

    #[test]
    fn display_date_uses_dash_when_missing() {
        let r = record(AidStatus::Future);
        assert_eq!(r.display_date(), "-");
        let dated = r.with_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(dated.display_date(), "2025-03-01");
    }
}
