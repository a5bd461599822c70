//! Tests for bulk planning.

use super::*;
use crate::model::{AidId, AidStatus};

fn future(aid: &str, beneficiary: &str) -> AidRecord {
    AidRecord::new(
        AidId::new(aid).unwrap(),
        BeneficiaryId::new(beneficiary).unwrap(),
        AidStatus::Future,
    )
}

fn strs(ids: &[BeneficiaryId]) -> Vec<&str> {
    ids.iter().map(|i| i.as_str()).collect()
}

// ===== parse_exceptions =====

#[test]
fn exceptions_are_trimmed_and_blank_lines_dropped() {
    let out = parse_exceptions("  11 \n\n\t13\r\n   \n");
    assert_eq!(strs(&out), vec!["11", "13"]);
}

#[test]
fn duplicate_exceptions_collapse() {
    let out = parse_exceptions("11\n13\n11");
    assert_eq!(strs(&out), vec!["11", "13"]);
}

#[test]
fn several_ids_on_one_line_are_split() {
    // GIVEN two ids pasted onto the second line
    let out = parse_exceptions("11\n12 13\t14");

    // THEN each id counts as its own exception
    assert_eq!(strs(&out), vec!["11", "12", "13", "14"]);
}

#[test]
fn empty_text_has_no_exceptions() {
    assert!(parse_exceptions("").is_empty());
}

// ===== plan_bulk =====

#[test]
fn exceptions_split_off_for_deletion() {
    // GIVEN filtered Future ids 10..=13 and exceptions 11, 13
    let records = vec![
        future("a", "10"),
        future("b", "11"),
        future("c", "12"),
        future("d", "13"),
    ];

    // WHEN planning
    let plan = plan_bulk(&records, "11\n13").unwrap();

    // THEN the rest are completed and exceptions are deleted
    assert_eq!(strs(&plan.complete), vec!["10", "12"]);
    assert_eq!(strs(&plan.delete), vec!["11", "13"]);
}

#[test]
fn empty_view_and_no_exceptions_is_noop() {
    let records: Vec<AidRecord> = vec![];
    assert_eq!(plan_bulk(&records, ""), Err(AidError::NoOp));
    assert_eq!(plan_bulk(&records, "\n  \n"), Err(AidError::NoOp));
}

#[test]
fn exceptions_outside_view_are_still_deleted() {
    let records = vec![future("a", "10")];
    let plan = plan_bulk(&records, "99").unwrap();
    assert_eq!(strs(&plan.complete), vec!["10"]);
    assert_eq!(strs(&plan.delete), vec!["99"]);
}

#[test]
fn all_excepted_still_runs_for_deletion() {
    let records = vec![future("a", "10")];
    let plan = plan_bulk(&records, "10").unwrap();
    assert!(plan.complete.is_empty());
    assert_eq!(strs(&plan.delete), vec!["10"]);
}

#[test]
fn beneficiary_with_several_records_is_listed_once() {
    let records = vec![future("a", "10"), future("b", "10"), future("c", "12")];
    let plan = plan_bulk(&records, "").unwrap();
    assert_eq!(strs(&plan.complete), vec!["10", "12"]);
}

#[test]
fn ids_sharing_a_line_are_all_deleted() {
    let records = vec![future("a", "10"), future("b", "11"), future("c", "12")];

    let plan = plan_bulk(&records, "10 11").unwrap();

    assert_eq!(strs(&plan.complete), vec!["12"]);
    assert_eq!(strs(&plan.delete), vec!["10", "11"]);
}
