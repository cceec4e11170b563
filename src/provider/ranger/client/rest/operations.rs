//! # Operations
//!
//! Implementation of the `ServiceAdmin` trait for the Ranger admin REST API,
//! plus the read-only audit queries the test harness uses.

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::field::Empty;
use tracing::{debug, info, info_span, warn, Instrument};

use super::requests::CreateServiceRequest;
use super::responses::CountResponse;
use super::RangerAdminREST;
use crate::constants::{ACCESS_AUDIT_COUNT_PATH, SERVICE_BY_NAME_PATH, SERVICE_PATH};
use crate::model::{RangerService, ServiceDescriptor};
use crate::provider::ranger::client::common::{error_message, OperationTracker};
use crate::provider::{AdminError, ServiceAdmin};

impl RangerAdminREST {
    /// Send a request, mapping connection failures to [`AdminError::Transport`]
    async fn send(
        &self,
        method: Method,
        url: &Url,
        body: Option<&CreateServiceRequest<'_>>,
    ) -> Result<Response, AdminError> {
        let mut request = self.make_request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(|source| AdminError::Transport {
            url: url.to_string(),
            source,
        })
    }

    /// Read the body and parse it as JSON
    ///
    /// An empty body is a decode error, not an empty value.
    async fn read_json<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, AdminError> {
        let body = response.text().await.map_err(|source| AdminError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| AdminError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Turn a non-success response into [`AdminError::Api`]
    async fn handle_error_response(response: Response) -> AdminError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AdminError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        }
    }

    /// Number of entries in Ranger's access audit store
    ///
    /// # Errors
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, or the body is not a `{"value": n}` document.
    pub async fn access_audit_count(&self) -> Result<u64, AdminError> {
        let url = self.endpoint(ACCESS_AUDIT_COUNT_PATH, None);
        let response = self.send(Method::GET, &url, None).await?;
        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }
        let count: CountResponse = Self::read_json(&url, response).await?;
        Ok(count.value)
    }
}

#[async_trait]
impl ServiceAdmin for RangerAdminREST {
    async fn get_service(&self, name: &str) -> Result<Option<RangerService>, AdminError> {
        let span = tracing::debug_span!(
            "ranger.service.get",
            service.name = name,
            operation.found = Empty,
            operation.success = Empty,
            operation.duration_ms = Empty,
            error.message = Empty,
        );
        let tracker = OperationTracker::new(span.clone());

        async move {
            let url = self.endpoint(SERVICE_BY_NAME_PATH, Some(name));
            let response = match self.send(Method::GET, &url, None).await {
                Ok(response) => response,
                Err(e) => {
                    tracker.record_error(&e.to_string());
                    return Err(e);
                }
            };

            let result = match response.status() {
                StatusCode::NO_CONTENT => Ok(None),
                status if status.is_success() => {
                    // A JSON `null` body means "no such service" as well
                    Self::read_json::<Option<RangerService>>(&url, response).await
                }
                StatusCode::NOT_FOUND => Ok(None),
                StatusCode::SERVICE_UNAVAILABLE => {
                    warn!("Ranger admin unavailable while looking up service {}", name);
                    Ok(None)
                }
                _ => Err(Self::handle_error_response(response).await),
            };

            match &result {
                Ok(found) => {
                    debug!("Service {} exists: {}", name, found.is_some());
                    tracker.record_found(found.is_some());
                    tracker.record_success();
                }
                Err(e) => tracker.record_error(&e.to_string()),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn create_service(
        &self,
        descriptor: &ServiceDescriptor,
    ) -> Result<RangerService, AdminError> {
        let span = info_span!(
            "ranger.service.create",
            service.name = %descriptor.name,
            service.kind = %descriptor.service_type,
            operation.success = Empty,
            operation.duration_ms = Empty,
            error.message = Empty,
        );
        let tracker = OperationTracker::new(span.clone());

        async move {
            info!("Creating Ranger service: {}", descriptor.name);

            let url = self.endpoint(SERVICE_PATH, None);
            let request = CreateServiceRequest::from(descriptor);
            let result = match self.send(Method::POST, &url, Some(&request)).await {
                Ok(response) if response.status().is_success() => {
                    Self::read_json::<RangerService>(&url, response).await
                }
                Ok(response) => Err(Self::handle_error_response(response).await),
                Err(e) => Err(e),
            };

            match &result {
                Ok(created) => {
                    debug!("Ranger assigned id {:?} to {}", created.id, created.name);
                    tracker.record_success();
                }
                Err(e) => tracker.record_error(&e.to_string()),
            }
            result
        }
        .instrument(span)
        .await
    }
}
