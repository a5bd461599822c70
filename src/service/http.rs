//! HTTP client for the aid endpoint.

use crate::model::{AidError, AidId, AidStatus, BeneficiaryId};
use crate::service::protocol::{Envelope, Request};
use crate::service::{AidService, ServiceAck};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Content type the endpoint expects; a JSON body under `text/plain` avoids
/// a CORS preflight on the deployed web app.
const CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// [`AidService`] over HTTP.
///
/// No request timeout is set: a slow call keeps its control disabled until it
/// resolves, and other controls stay usable meanwhile.
pub struct HttpAidService {
    endpoint: String,
    client: Client,
}

impl HttpAidService {
    /// Client for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, AidError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(CONTENT_TYPE),
        );
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, request: &Request<'_>) -> Result<Envelope, AidError> {
        let action = request.action();
        let body = serde_json::to_string(request)?;
        debug!(action, "sending request");

        let response = self
            .client
            .post(&self.endpoint)
            .body(body)
            .send()
            .await
            .inspect_err(|e| warn!(action, error = %e, "request failed"))?;

        let envelope = handle_response(response).await.and_then(Envelope::into_result);
        match &envelope {
            Ok(env) => info!(action, message = ?env.message, "request succeeded"),
            Err(e) => warn!(action, error = %e, "request rejected"),
        }
        envelope
    }
}

async fn handle_response(response: reqwest::Response) -> Result<Envelope, AidError> {
    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("unexpected status");
        return Err(AidError::network(format!(
            "HTTP {}: {}",
            status.as_u16(),
            reason
        )));
    }
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl AidService for HttpAidService {
    async fn get_all_aid_records(&self, token: &str) -> Result<Vec<Value>, AidError> {
        self.call(&Request::GetAllAidRecords { token })
            .await?
            .into_records()
    }

    async fn update_aid_status(
        &self,
        token: &str,
        aid_id: &AidId,
        status: AidStatus,
    ) -> Result<ServiceAck, AidError> {
        let envelope = self
            .call(&Request::UpdateAidStatus {
                token,
                aid_id: aid_id.as_str(),
                new_status: status.as_str(),
            })
            .await?;
        Ok(ServiceAck {
            message: envelope.message,
        })
    }

    async fn bulk_process_aid(
        &self,
        token: &str,
        complete: &[BeneficiaryId],
        delete: &[BeneficiaryId],
    ) -> Result<ServiceAck, AidError> {
        let envelope = self
            .call(&Request::BulkProcessAid {
                token,
                beneficiary_ids_to_complete: complete.iter().map(BeneficiaryId::as_str).collect(),
                aid_records_to_delete: delete.iter().map(BeneficiaryId::as_str).collect(),
            })
            .await?;
        Ok(ServiceAck {
            message: envelope.message,
        })
    }
}
