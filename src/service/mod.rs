//! Remote aid service: the trait the controller talks to, plus its HTTP and
//! in-memory implementations.

pub mod http;
pub mod mock;
pub mod protocol;

pub use http::HttpAidService;
pub use mock::{MockAidService, MockCall};

use crate::model::{AidError, AidId, AidStatus, BeneficiaryId};
use async_trait::async_trait;
use serde_json::Value;

/// Successful mutation acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceAck {
    /// Human-readable message from the service, if it sent one.
    pub message: Option<String>,
}

impl ServiceAck {
    /// Acknowledgement carrying a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// The aid service interface.
///
/// Records come back raw; alias resolution happens once, in
/// [`crate::model::ingest_records`], at the controller boundary.
#[async_trait]
pub trait AidService: Send + Sync {
    /// Fetch every aid record.
    async fn get_all_aid_records(&self, token: &str) -> Result<Vec<Value>, AidError>;

    /// Set one record's status.
    async fn update_aid_status(
        &self,
        token: &str,
        aid_id: &AidId,
        status: AidStatus,
    ) -> Result<ServiceAck, AidError>;

    /// Complete the Future records of `complete` and delete those of `delete`.
    async fn bulk_process_aid(
        &self,
        token: &str,
        complete: &[BeneficiaryId],
        delete: &[BeneficiaryId],
    ) -> Result<ServiceAck, AidError>;
}
