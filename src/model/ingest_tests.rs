//! Tests for record ingestion.

use super::*;
use serde_json::json;

// ===== alias resolution =====

#[test]
fn arabic_sheet_headers_resolve_to_canonical_fields() {
    // GIVEN a row with the sheet's native column names
    let raw = json!({
        "معرف المساعدة": "AID-1",
        "معرف المستفيد": 401234567,
        "اسم المستفيد": "Huda",
        "نوع المساعدة": "طرود غذائية أساسية",
        "حالة المساعدة": "Future ",
        "تاريخ الاستلام": "2025-09-06",
        "مصدر المساعدة": "zakat fund",
        "ملاحظات": "call first"
    });

    // WHEN ingesting
    let record = ingest_one(&raw).expect("row should be accepted");

    // THEN every canonical field is populated
    assert_eq!(record.id.as_str(), "AID-1");
    assert_eq!(record.beneficiary_id.as_str(), "401234567");
    assert_eq!(record.beneficiary_name, "Huda");
    assert_eq!(record.kind, "طرود غذائية أساسية");
    assert_eq!(record.status, AidStatus::Future);
    assert_eq!(record.scheduled_date, NaiveDate::from_ymd_opt(2025, 9, 6));
    assert_eq!(record.source, "zakat fund");
    assert_eq!(record.notes, "call first");
}

#[test]
fn english_aliases_resolve_to_canonical_fields() {
    let raw = json!({
        "id": 3,
        "idNo": "77",
        "fullName": "Omar",
        "type": "cash",
        "status": "Completed",
        "createdAt": "2025-02-01T10:30:00Z"
    });

    let record = ingest_one(&raw).unwrap();

    assert_eq!(record.id.as_str(), "3");
    assert_eq!(record.beneficiary_id.as_str(), "77");
    assert_eq!(record.beneficiary_name, "Omar");
    assert_eq!(record.kind, "cash");
    assert_eq!(record.status, AidStatus::Completed);
    assert_eq!(record.scheduled_date, NaiveDate::from_ymd_opt(2025, 2, 1));
}

#[test]
fn earlier_alias_wins_over_later_alias() {
    let raw = json!({
        "aidId": "primary",
        "id": "fallback",
        "beneficiaryId": "1",
        "status": "Future"
    });

    let record = ingest_one(&raw).unwrap();
    assert_eq!(record.id.as_str(), "primary");
}

#[test]
fn blank_alias_falls_through_to_next() {
    let raw = json!({
        "اسم المستفيد": "  ",
        "name": "Layla",
        "aidId": "a",
        "beneficiaryId": "b",
        "status": "Future"
    });

    let record = ingest_one(&raw).unwrap();
    assert_eq!(record.beneficiary_name, "Layla");
}

#[test]
fn first_present_date_key_is_used() {
    let raw = json!({
        "aidId": "a",
        "beneficiaryId": "b",
        "status": "Future",
        "date": "2024-01-01",
        "تاريخ الاستلام": "2025-05-05"
    });

    let record = ingest_one(&raw).unwrap();
    assert_eq!(record.scheduled_date, NaiveDate::from_ymd_opt(2025, 5, 5));
}

#[test]
fn bare_id_row_uses_id_as_beneficiary_too() {
    // GIVEN a row carrying only `id` as its identifier
    let raw = json!({
        "id": "401234567",
        "name": "Ahmad",
        "status": "Future",
        "date": "2025-01-01"
    });

    // WHEN ingesting
    let out = ingest_records(&[raw]);

    // THEN it is accepted and searchable by that id
    assert!(out.rejected.is_empty());
    let record = &out.records[0];
    assert_eq!(record.id.as_str(), "401234567");
    assert_eq!(record.beneficiary_id.as_str(), "401234567");
    assert_eq!(record.beneficiary_name, "Ahmad");
}

#[test]
fn beneficiary_alias_wins_over_bare_id() {
    let raw = json!({ "id": "A-9", "رقم الهوية": "900", "status": "Future" });

    let record = ingest_one(&raw).unwrap();

    assert_eq!(record.id.as_str(), "A-9");
    assert_eq!(record.beneficiary_id.as_str(), "900");
}

// ===== rejection =====

#[test]
fn missing_aid_id_is_rejected() {
    let raw = json!({ "beneficiaryId": "b", "status": "Future" });
    assert_eq!(ingest_one(&raw), Err(RejectReason::MissingAidId));
}

#[test]
fn missing_beneficiary_is_rejected() {
    let raw = json!({ "aidId": "a", "status": "Future" });
    assert_eq!(ingest_one(&raw), Err(RejectReason::MissingBeneficiaryId));
}

#[test]
fn unknown_status_is_rejected_with_value() {
    let raw = json!({ "aidId": "a", "beneficiaryId": "b", "status": " Pending " });
    assert_eq!(
        ingest_one(&raw),
        Err(RejectReason::UnknownStatus("Pending".to_string()))
    );
}

#[test]
fn non_object_is_rejected() {
    assert_eq!(ingest_one(&json!(42)), Err(RejectReason::NotAnObject));
}

#[test]
fn batch_keeps_good_rows_and_reports_bad_ones_by_index() {
    // GIVEN a batch with one bad row in the middle
    let raw = vec![
        json!({ "aidId": "1", "beneficiaryId": "10", "status": "Future" }),
        json!({ "aidId": "2", "beneficiaryId": "11", "status": "Lost" }),
        json!({ "aidId": "3", "beneficiaryId": "12", "status": "Completed" }),
    ];

    // WHEN ingesting
    let out = ingest_records(&raw);

    // THEN the good rows survive in order and the bad one is reported
    let ids: Vec<&str> = out.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(out.rejected.len(), 1);
    assert_eq!(out.rejected[0].index, 1);
}

#[test]
fn repeated_aid_id_keeps_first_row_only() {
    // GIVEN the same aid id under both statuses
    let raw = vec![
        json!({ "id": "7", "beneficiaryId": "70", "status": "Future" }),
        json!({ "id": "8", "beneficiaryId": "80", "status": "Future" }),
        json!({ "id": "7", "beneficiaryId": "70", "status": "Completed" }),
    ];

    // WHEN ingesting
    let out = ingest_records(&raw);

    // THEN the later row is rejected as a duplicate
    let ids: Vec<(&str, AidStatus)> = out
        .records
        .iter()
        .map(|r| (r.id.as_str(), r.status))
        .collect();
    assert_eq!(ids, vec![("7", AidStatus::Future), ("8", AidStatus::Future)]);
    assert_eq!(
        out.rejected,
        vec![RejectedRecord {
            index: 2,
            reason: RejectReason::DuplicateAidId("7".to_string()),
        }]
    );
}

// ===== dates =====

#[test]
fn parse_date_accepts_known_formats() {
    let expected = NaiveDate::from_ymd_opt(2025, 3, 1);
    assert_eq!(parse_date("2025-03-01"), expected);
    assert_eq!(parse_date("2025/03/01"), expected);
    assert_eq!(parse_date("2025-03-01T23:00:00+02:00"), expected);
    assert_eq!(parse_date("2025-03-01T08:15:00"), expected);
    assert_eq!(parse_date("2025-03-01T08:15:00.250"), expected);
}

#[test]
fn parse_date_rejects_garbage() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("yesterday"), None);
    assert_eq!(parse_date("2025-13-40"), None);
}
