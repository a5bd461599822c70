//! Ingestion of raw service records into the canonical schema.
//!
//! The remote sheet names its columns inconsistently across deployments and
//! versions, so each logical field is resolved from an ordered alias list.
//! Resolution happens exactly once here; downstream code reads only
//! [`AidRecord`] fields.

use crate::model::{AidId, AidRecord, AidStatus, BeneficiaryId};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use std::collections::HashSet;

const AID_ID_KEYS: &[&str] = &["معرف المساعدة", "aidId", "aid_id", "id"];
const BENEFICIARY_ID_KEYS: &[&str] = &[
    "معرف المستفيد",
    "رقم الهوية",
    "beneficiaryId",
    "beneficiary_id",
    "idNo",
];
/// Rows that carry only `id` use it as the beneficiary's national id too.
const BENEFICIARY_FALLBACK_KEYS: &[&str] = &["id"];
const BENEFICIARY_NAME_KEYS: &[&str] = &[
    "اسم المستفيد",
    "المستفيد",
    "الاسم الكامل",
    "beneficiaryName",
    "beneficiary_name",
    "name",
    "fullName",
];
const KIND_KEYS: &[&str] = &["نوع المساعدة", "kind", "type", "aidType"];
const STATUS_KEYS: &[&str] = &["حالة المساعدة", "status", "aidStatus"];
/// Date-like keys, probed in order. The first one present wins.
pub const DATE_KEYS: &[&str] = &[
    "تاريخ الاستلام",
    "تاريخ التسجيل",
    "scheduledDate",
    "date",
    "createdAt",
    "created_at",
    "datetime",
];
const SOURCE_KEYS: &[&str] = &["مصدر المساعدة", "source", "aidSource"];
const NOTES_KEYS: &[&str] = &["ملاحظات", "notes", "aidNotes"];

/// Why a raw record was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The element is not a JSON object.
    NotAnObject,
    /// No aid id under any alias.
    MissingAidId,
    /// No beneficiary id under any alias.
    MissingBeneficiaryId,
    /// Status is missing or neither `Future` nor `Completed`.
    UnknownStatus(String),
    /// An earlier row in the same batch already used this aid id.
    DuplicateAidId(String),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotAnObject => f.write_str("record is not an object"),
            RejectReason::MissingAidId => f.write_str("missing aid id"),
            RejectReason::MissingBeneficiaryId => f.write_str("missing beneficiary id"),
            RejectReason::UnknownStatus(s) => write!(f, "unknown status '{s}'"),
            RejectReason::DuplicateAidId(id) => write!(f, "duplicate aid id '{id}'"),
        }
    }
}

/// A raw record that ingestion skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position in the fetched batch.
    pub index: usize,
    /// Why it was skipped.
    pub reason: RejectReason,
}

/// Outcome of ingesting one fetched batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    /// Accepted records in fetch order.
    pub records: Vec<AidRecord>,
    /// Skipped records.
    pub rejected: Vec<RejectedRecord>,
}

/// Ingest a fetched batch. Never fails as a whole; bad rows are rejected
/// individually.
///
/// Aid ids are unique within the result: the first row with a given id wins
/// and later ones are rejected as [`RejectReason::DuplicateAidId`].
pub fn ingest_records(raw: &[Value]) -> Ingested {
    let mut out = Ingested::default();
    let mut seen = HashSet::new();
    for (index, value) in raw.iter().enumerate() {
        let outcome = ingest_one(value).and_then(|record| {
            if seen.insert(record.id.clone()) {
                Ok(record)
            } else {
                Err(RejectReason::DuplicateAidId(record.id.as_str().to_string()))
            }
        });
        match outcome {
            Ok(record) => out.records.push(record),
            Err(reason) => out.rejected.push(RejectedRecord { index, reason }),
        }
    }
    out
}

/// Resolve a single raw record.
pub fn ingest_one(value: &Value) -> Result<AidRecord, RejectReason> {
    let obj = value.as_object().ok_or(RejectReason::NotAnObject)?;

    let id = field(obj, AID_ID_KEYS)
        .and_then(|s| AidId::new(s).ok())
        .ok_or(RejectReason::MissingAidId)?;
    let beneficiary_id = field(obj, BENEFICIARY_ID_KEYS)
        .or_else(|| field(obj, BENEFICIARY_FALLBACK_KEYS))
        .and_then(|s| BeneficiaryId::new(s).ok())
        .ok_or(RejectReason::MissingBeneficiaryId)?;

    let raw_status = field(obj, STATUS_KEYS).unwrap_or_default();
    let status = AidStatus::parse(&raw_status)
        .ok_or_else(|| RejectReason::UnknownStatus(raw_status.trim().to_string()))?;

    Ok(AidRecord {
        id,
        beneficiary_id,
        beneficiary_name: field(obj, BENEFICIARY_NAME_KEYS).unwrap_or_default(),
        kind: field(obj, KIND_KEYS).unwrap_or_default(),
        status,
        scheduled_date: field(obj, DATE_KEYS).and_then(|s| parse_date(&s)),
        source: field(obj, SOURCE_KEYS).unwrap_or_default(),
        notes: field(obj, NOTES_KEYS).unwrap_or_default(),
    })
}

/// First non-empty value among `keys`, stringified.
fn field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Parse the date formats the sheet has been seen to produce.
///
/// Timestamps keep only their calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y/%m/%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

#[cfg(test)]
#[path = "ingest_tests.rs"]
mod tests;
