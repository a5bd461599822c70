//! Tests for the lifecycle reducer.

use super::*;
use crate::model::{AidRecord, BeneficiaryId, RejectReason, RejectedRecord};
use crate::state::notifications::Severity;

fn rec(aid: &str, beneficiary: &str, name: &str, status: AidStatus) -> AidRecord {
    AidRecord::new(
        AidId::new(aid).unwrap(),
        BeneficiaryId::new(beneficiary).unwrap(),
        status,
    )
    .with_name(name)
}

fn id(s: &str) -> AidId {
    AidId::new(s).unwrap()
}

fn fetched(records: Vec<AidRecord>) -> Msg {
    Msg::RecordsFetched(Ok(Ingested {
        records,
        rejected: Vec::new(),
    }))
}

/// Page loaded with Future 10..=13 and one Completed record.
fn loaded_page() -> AidPage {
    let (page, _) = update(
        AidPage::default(),
        fetched(vec![
            rec("a", "10", "Amal", AidStatus::Future),
            rec("b", "11", "Basim", AidStatus::Future),
            rec("c", "12", "Cala", AidStatus::Future),
            rec("d", "13", "Dunya", AidStatus::Future),
            rec("e", "14", "Emad", AidStatus::Completed),
        ]),
    );
    page
}

fn beneficiaries(ids: &[BeneficiaryId]) -> Vec<&str> {
    ids.iter().map(|b| b.as_str()).collect()
}

fn latest_severity(page: &AidPage) -> Option<Severity> {
    page.notifications.latest().map(|n| n.severity)
}

// ===== Refresh =====

#[test]
fn refresh_issues_fetch_and_marks_in_flight() {
    let (page, cmd) = update(AidPage::default(), Msg::RefreshRequested);
    assert_eq!(cmd, Some(Command::FetchAll));
    assert!(page.is_refreshing());
}

#[test]
fn second_refresh_while_fetching_is_queued_not_sent() {
    let (page, _) = update(AidPage::default(), Msg::RefreshRequested);
    let (page, cmd) = update(page, Msg::RefreshRequested);

    assert_eq!(cmd, None);
    assert!(page.refresh_queued);

    // WHEN the first fetch lands THEN the queued one goes out
    let (page, cmd) = update(page, fetched(vec![]));
    assert_eq!(cmd, Some(Command::FetchAll));
    assert!(page.is_refreshing());
    assert!(!page.refresh_queued);
}

#[test]
fn fetch_partitions_records() {
    let page = loaded_page();
    assert!(page.is_loaded());
    assert_eq!(page.list(Partition::Future).filtered_len(), 4);
    assert_eq!(page.list(Partition::Completed).filtered_len(), 1);
}

#[test]
fn fetch_failure_keeps_previous_snapshot() {
    let page = loaded_page();
    let (page, cmd) = update(
        page,
        Msg::RecordsFetched(Err(AidError::network("connection refused"))),
    );

    assert_eq!(cmd, None);
    assert_eq!(page.list(Partition::Future).filtered_len(), 4);
    assert_eq!(latest_severity(&page), Some(Severity::Error));
    assert!(!page.is_refreshing());
}

#[test]
fn rejected_records_raise_a_warning() {
    let (page, _) = update(
        AidPage::default(),
        Msg::RecordsFetched(Ok(Ingested {
            records: vec![rec("a", "10", "Amal", AidStatus::Future)],
            rejected: vec![RejectedRecord {
                index: 1,
                reason: RejectReason::MissingAidId,
            }],
        })),
    );
    assert_eq!(latest_severity(&page), Some(Severity::Warning));
    assert_eq!(page.list(Partition::Future).filtered_len(), 1);
}

#[test]
fn fetch_keeps_filter_and_resets_page() {
    let page = loaded_page();
    let (page, _) = update(
        page,
        Msg::FilterChanged {
            partition: Partition::Future,
            term: "AM".into(),
        },
    );
    let (page, _) = update(page, Msg::RefreshRequested);
    let (page, _) = update(
        page,
        fetched(vec![
            rec("a", "10", "Amal", AidStatus::Future),
            rec("f", "15", "Hisham", AidStatus::Future),
        ]),
    );

    assert_eq!(page.list(Partition::Future).term(), "AM");
    assert_eq!(page.list(Partition::Future).filtered_len(), 2);
    assert_eq!(page.list(Partition::Future).page(), 1);
}

// ===== View controls =====

#[test]
fn filter_applies_to_one_partition_only() {
    let (page, _) = update(
        loaded_page(),
        Msg::FilterChanged {
            partition: Partition::Future,
            term: "11".into(),
        },
    );
    assert_eq!(page.list(Partition::Future).filtered_len(), 1);
    assert_eq!(page.list(Partition::Completed).filtered_len(), 1);
}

#[test]
fn page_request_is_clamped() {
    let per_page = NonZeroUsize::new(2).unwrap();
    let (page, _) = update(
        loaded_page(),
        Msg::PerPageChanged {
            partition: Partition::Future,
            per_page,
        },
    );
    let (page, _) = update(
        page,
        Msg::PageRequested {
            partition: Partition::Future,
            page: 99,
        },
    );
    assert_eq!(page.list(Partition::Future).page(), 2);
}

// ===== Single completion =====

#[test]
fn completion_requires_confirmation() {
    let (page, cmd) = update(loaded_page(), Msg::CompleteRequested(id("b")));
    assert_eq!(cmd, None);
    assert_eq!(page.pending_confirmation().map(|r| r.id.as_str()), Some("b"));

    let (page, cmd) = update(page, Msg::CompleteConfirmed);
    assert_eq!(
        cmd,
        Some(Command::UpdateStatus {
            id: id("b"),
            status: AidStatus::Completed,
        })
    );
    assert!(page.is_completing(&id("b")));
    assert!(page.pending_confirmation().is_none());
}

#[test]
fn cancelled_confirmation_sends_nothing() {
    let (page, _) = update(loaded_page(), Msg::CompleteRequested(id("b")));
    let (page, cmd) = update(page, Msg::CompleteCancelled);
    assert_eq!(cmd, None);
    assert!(page.pending_confirmation().is_none());

    let (_, cmd) = update(page, Msg::CompleteConfirmed);
    assert_eq!(cmd, None);
}

#[test]
fn completed_record_cannot_be_completed_again() {
    let (page, cmd) = update(loaded_page(), Msg::CompleteRequested(id("e")));
    assert_eq!(cmd, None);
    assert!(page.pending_confirmation().is_none());
    assert_eq!(latest_severity(&page), Some(Severity::Warning));
}

#[test]
fn in_flight_record_ignores_further_requests() {
    let (page, _) = update(loaded_page(), Msg::CompleteRequested(id("b")));
    let (page, _) = update(page, Msg::CompleteConfirmed);

    let (page, cmd) = update(page, Msg::CompleteRequested(id("b")));
    assert_eq!(cmd, None);
    assert!(page.pending_confirmation().is_none());
}

#[test]
fn other_records_stay_completable_while_one_is_in_flight() {
    let (page, _) = update(loaded_page(), Msg::CompleteRequested(id("b")));
    let (page, _) = update(page, Msg::CompleteConfirmed);

    let (page, _) = update(page, Msg::CompleteRequested(id("c")));
    let (page, cmd) = update(page, Msg::CompleteConfirmed);

    assert!(matches!(cmd, Some(Command::UpdateStatus { .. })));
    assert_eq!(page.completing_count(), 2);
}

#[test]
fn successful_completion_moves_record_to_completed() {
    let (page, _) = update(loaded_page(), Msg::CompleteRequested(id("b")));
    let (page, _) = update(page, Msg::CompleteConfirmed);

    let (page, cmd) = update(
        page,
        Msg::CompleteFinished {
            id: id("b"),
            result: Ok(Some("done".into())),
        },
    );

    assert_eq!(cmd, None);
    assert!(!page.is_completing(&id("b")));
    assert!(!page.list(Partition::Future).contains(&id("b")));
    let moved = page.list(Partition::Completed).get(&id("b"));
    assert_eq!(moved.map(|r| r.status), Some(AidStatus::Completed));
    assert_eq!(latest_severity(&page), Some(Severity::Success));
}

#[test]
fn failed_completion_leaves_everything_in_place() {
    // GIVEN record b is being completed
    let (page, _) = update(loaded_page(), Msg::CompleteRequested(id("b")));
    let (page, _) = update(page, Msg::CompleteConfirmed);

    // WHEN the service reports failure
    let (page, cmd) = update(
        page,
        Msg::CompleteFinished {
            id: id("b"),
            result: Err(AidError::server(Some("sheet locked".into()))),
        },
    );

    // THEN b is still Future, its control is re-enabled, totals unchanged
    assert_eq!(cmd, None);
    assert!(page.list(Partition::Future).contains(&id("b")));
    assert!(!page.is_completing(&id("b")));
    assert_eq!(page.list(Partition::Future).filtered_len(), 4);
    assert_eq!(page.list(Partition::Completed).filtered_len(), 1);
    let latest = page.notifications.latest().unwrap();
    assert_eq!(latest.severity, Severity::Error);
    assert!(latest.message.contains("sheet locked"));
}

// ===== Bulk =====

#[test]
fn bulk_splits_filtered_view_by_exceptions() {
    let (page, cmd) = update(
        loaded_page(),
        Msg::BulkConfirmed {
            exception_text: "11\n13\n".into(),
        },
    );

    let Some(Command::BulkProcess(plan)) = cmd else {
        panic!("expected bulk command, got {cmd:?}");
    };
    assert_eq!(beneficiaries(&plan.complete), vec!["10", "12"]);
    assert_eq!(beneficiaries(&plan.delete), vec!["11", "13"]);
    assert!(page.is_bulk_in_flight());
}

#[test]
fn bulk_is_scoped_to_the_active_filter() {
    let (page, _) = update(
        loaded_page(),
        Msg::FilterChanged {
            partition: Partition::Future,
            term: "amal".into(),
        },
    );
    let (_, cmd) = update(
        page,
        Msg::BulkConfirmed {
            exception_text: String::new(),
        },
    );
    let Some(Command::BulkProcess(plan)) = cmd else {
        panic!("expected bulk command");
    };
    assert_eq!(beneficiaries(&plan.complete), vec!["10"]);
}

#[test]
fn bulk_with_nothing_to_do_sends_nothing() {
    // GIVEN a filter that matches nothing
    let (page, _) = update(
        loaded_page(),
        Msg::FilterChanged {
            partition: Partition::Future,
            term: "nobody".into(),
        },
    );

    // WHEN bulk is confirmed with an empty exception list
    let (page, cmd) = update(
        page,
        Msg::BulkConfirmed {
            exception_text: "  \n".into(),
        },
    );

    // THEN no call and a warning
    assert_eq!(cmd, None);
    assert!(!page.is_bulk_in_flight());
    assert_eq!(latest_severity(&page), Some(Severity::Warning));
}

#[test]
fn bulk_with_malformed_exceptions_sends_nothing() {
    let (page, cmd) = update(
        loaded_page(),
        Msg::BulkConfirmed {
            exception_text: "11 12".into(),
        },
    );
    assert_eq!(cmd, None);
    assert!(!page.is_bulk_in_flight());
    assert_eq!(latest_severity(&page), Some(Severity::Warning));
}

#[test]
fn second_bulk_while_in_flight_is_ignored() {
    let msg = Msg::BulkConfirmed {
        exception_text: String::new(),
    };
    let (page, _) = update(loaded_page(), msg.clone());
    let (_, cmd) = update(page, msg);
    assert_eq!(cmd, None);
}

#[test]
fn bulk_success_refetches() {
    let (page, _) = update(
        loaded_page(),
        Msg::BulkConfirmed {
            exception_text: String::new(),
        },
    );
    let (page, cmd) = update(page, Msg::BulkFinished(Ok(None)));

    assert_eq!(cmd, Some(Command::FetchAll));
    assert!(!page.is_bulk_in_flight());
    assert_eq!(latest_severity(&page), Some(Severity::Success));
}

#[test]
fn bulk_success_during_fetch_queues_refetch() {
    let (page, _) = update(
        loaded_page(),
        Msg::BulkConfirmed {
            exception_text: String::new(),
        },
    );
    let (page, _) = update(page, Msg::RefreshRequested);

    let (page, cmd) = update(page, Msg::BulkFinished(Ok(None)));
    assert_eq!(cmd, None);
    assert!(page.refresh_queued);

    let (_, cmd) = update(page, fetched(vec![]));
    assert_eq!(cmd, Some(Command::FetchAll));
}

#[test]
fn bulk_failure_mutates_nothing() {
    let before = loaded_page();
    let (page, _) = update(
        before.clone(),
        Msg::BulkConfirmed {
            exception_text: "11".into(),
        },
    );
    let (page, cmd) = update(
        page,
        Msg::BulkFinished(Err(AidError::network("timed out"))),
    );

    assert_eq!(cmd, None);
    assert!(!page.is_bulk_in_flight());
    assert_eq!(page.future, before.future);
    assert_eq!(page.completed, before.completed);
    assert_eq!(latest_severity(&page), Some(Severity::Error));
}
