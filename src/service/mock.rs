//! In-memory aid service for tests and offline runs.
//!
//! Keeps a small record sheet, applies mutations to it the way the remote
//! service does, records every call and can be told to fail.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::model::{AidError, AidId, AidRecord, AidStatus, BeneficiaryId};
use crate::service::{AidService, ServiceAck};

/// A recorded call to the mock service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `getAllAidRecords`.
    GetAll,
    /// `updateAidStatus`.
    UpdateStatus(AidId, AidStatus),
    /// `bulkProcessAid`.
    BulkProcess {
        /// Beneficiaries to complete.
        complete: Vec<BeneficiaryId>,
        /// Beneficiaries to delete.
        delete: Vec<BeneficiaryId>,
    },
}

/// Mock implementation of [`AidService`].
#[derive(Default)]
pub struct MockAidService {
    records: Mutex<Vec<AidRecord>>,
    extra_rows: Mutex<Vec<Value>>,
    calls: Mutex<Vec<MockCall>>,
    fetch_error: Mutex<Option<AidError>>,
    update_error: Mutex<Option<AidError>>,
    bulk_error: Mutex<Option<AidError>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Serialize a record the way the upstream sheet names its columns.
pub fn to_raw(record: &AidRecord) -> Value {
    let mut row = json!({
        "معرف المساعدة": record.id.as_str(),
        "رقم الهوية": record.beneficiary_id.as_str(),
        "اسم المستفيد": record.beneficiary_name,
        "نوع المساعدة": record.kind,
        "حالة المساعدة": record.status.as_str(),
        "مصدر المساعدة": record.source,
        "ملاحظات": record.notes,
    });
    if let (Some(date), Value::Object(map)) = (record.scheduled_date, &mut row) {
        map.insert(
            "تاريخ الاستلام".to_string(),
            Value::String(date.format("%Y-%m-%d").to_string()),
        );
    }
    row
}

impl MockAidService {
    /// Empty sheet, no failures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the sheet.
    pub fn with_records(self, records: impl IntoIterator<Item = AidRecord>) -> Self {
        lock(&self.records).extend(records);
        self
    }

    /// Append raw rows served verbatim after the sheet records.
    pub fn with_raw_rows(self, rows: impl IntoIterator<Item = Value>) -> Self {
        lock(&self.extra_rows).extend(rows);
        self
    }

    /// Make every fetch fail with `err`.
    pub fn with_fetch_error(self, err: AidError) -> Self {
        self.set_fetch_error(Some(err));
        self
    }

    /// Make every status update fail with `err`.
    pub fn with_update_error(self, err: AidError) -> Self {
        self.set_update_error(Some(err));
        self
    }

    /// Make every bulk call fail with `err`.
    pub fn with_bulk_error(self, err: AidError) -> Self {
        self.set_bulk_error(Some(err));
        self
    }

    /// Change the fetch failure at runtime.
    pub fn set_fetch_error(&self, err: Option<AidError>) {
        *lock(&self.fetch_error) = err;
    }

    /// Change the update failure at runtime.
    pub fn set_update_error(&self, err: Option<AidError>) {
        *lock(&self.update_error) = err;
    }

    /// Change the bulk failure at runtime.
    pub fn set_bulk_error(&self, err: Option<AidError>) {
        *lock(&self.bulk_error) = err;
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Current sheet contents.
    pub fn records(&self) -> Vec<AidRecord> {
        lock(&self.records).clone()
    }

    fn record(&self, call: MockCall) {
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl AidService for MockAidService {
    async fn get_all_aid_records(&self, _token: &str) -> Result<Vec<Value>, AidError> {
        self.record(MockCall::GetAll);
        if let Some(err) = lock(&self.fetch_error).clone() {
            return Err(err);
        }
        let mut rows: Vec<Value> = lock(&self.records).iter().map(to_raw).collect();
        rows.extend(lock(&self.extra_rows).iter().cloned());
        Ok(rows)
    }

    async fn update_aid_status(
        &self,
        _token: &str,
        aid_id: &AidId,
        status: AidStatus,
    ) -> Result<ServiceAck, AidError> {
        self.record(MockCall::UpdateStatus(aid_id.clone(), status));
        if let Some(err) = lock(&self.update_error).clone() {
            return Err(err);
        }
        let mut records = lock(&self.records);
        let record = records
            .iter_mut()
            .find(|r| &r.id == aid_id)
            .ok_or_else(|| AidError::server(Some(format!("aid record {aid_id} not found"))))?;
        record.status = status;
        Ok(ServiceAck::with_message("Aid status updated"))
    }

    async fn bulk_process_aid(
        &self,
        _token: &str,
        complete: &[BeneficiaryId],
        delete: &[BeneficiaryId],
    ) -> Result<ServiceAck, AidError> {
        self.record(MockCall::BulkProcess {
            complete: complete.to_vec(),
            delete: delete.to_vec(),
        });
        if let Some(err) = lock(&self.bulk_error).clone() {
            return Err(err);
        }
        let mut records = lock(&self.records);
        records.retain(|r| !(r.status == AidStatus::Future && delete.contains(&r.beneficiary_id)));
        let mut completed = 0usize;
        for r in records
            .iter_mut()
            .filter(|r| r.status == AidStatus::Future && complete.contains(&r.beneficiary_id))
        {
            r.status = AidStatus::Completed;
            completed += 1;
        }
        Ok(ServiceAck::with_message(format!(
            "{completed} record(s) completed, {} beneficiary(ies) removed",
            delete.len()
        )))
    }
}
