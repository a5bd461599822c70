//! Wire format of the aid endpoint.
//!
//! Every call is a POST of one JSON object tagged by `action`; every reply is
//! an envelope `{ success, message?, data? }`.

use crate::model::AidError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request<'a> {
    /// Fetch all records.
    GetAllAidRecords {
        /// Admin session token.
        token: &'a str,
    },
    /// Set one record's status.
    #[serde(rename_all = "camelCase")]
    UpdateAidStatus {
        /// Admin session token.
        token: &'a str,
        /// Record to update.
        aid_id: &'a str,
        /// Target status, `Future` or `Completed`.
        new_status: &'a str,
    },
    /// Bulk complete and delete.
    #[serde(rename_all = "camelCase")]
    BulkProcessAid {
        /// Admin session token.
        token: &'a str,
        /// Beneficiaries whose Future records become Completed.
        beneficiary_ids_to_complete: Vec<&'a str>,
        /// Beneficiaries whose Future records are deleted.
        aid_records_to_delete: Vec<&'a str>,
    },
}

impl Request<'_> {
    /// Action name, for logging.
    pub fn action(&self) -> &'static str {
        match self {
            Request::GetAllAidRecords { .. } => "getAllAidRecords",
            Request::UpdateAidStatus { .. } => "updateAidStatus",
            Request::BulkProcessAid { .. } => "bulkProcessAid",
        }
    }
}

/// Response envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Envelope {
    /// Whether the service applied the request.
    #[serde(default)]
    pub success: bool,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload, for queries.
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// `Ok(self)` on success, a server error carrying the message otherwise.
    pub fn into_result(self) -> Result<Self, AidError> {
        if self.success {
            Ok(self)
        } else {
            Err(AidError::server(self.message))
        }
    }

    /// The record list of a `getAllAidRecords` reply.
    pub fn into_records(self) -> Result<Vec<Value>, AidError> {
        match self.into_result()?.data {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(AidError::network("response data is not a list")),
            None => Err(AidError::network("response carried no record list")),
        }
    }
}
