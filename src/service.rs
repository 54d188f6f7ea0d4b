//! Backend collaborator interface.
//!
//! # Responsibilities
//! - Define the operations a host backend implements for the web service
//! - Carry a backend result (status + optional JSON body) back to the router
//!
//! The router owns no storage and no resiliency; everything stateful lives
//! behind this trait.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

pub use tower::BoxError;

/// Result of a body-bearing backend operation.
///
/// If `status` is 200 the `body` must be present; the router treats a
/// missing body as a backend contract violation and panics.
#[derive(Debug, Clone)]
pub struct ServiceResult {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl ServiceResult {
    pub fn new(status: StatusCode, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// 200 with the given JSON body.
    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, Some(body))
    }

    /// Bare status, no body.
    pub fn status(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

/// Operations of the PassKit web-service protocol, implemented by the host
/// and injected into the router as `Arc<dyn PassKitService>`.
///
/// An `Err` from any operation is a backend-internal failure; the router
/// logs it and responds 500 with an empty body.
#[async_trait]
pub trait PassKitService: Send + Sync {
    /// Serve the latest version of a pass.
    ///
    /// Expected results: 200 with the pass document, 304 when unchanged
    /// since `if_modified_since`, 401 when the token is rejected.
    async fn latest_pass(
        &self,
        pass_type_identifier: &str,
        serial_number: &str,
        authentication_token: &str,
        if_modified_since: Option<DateTime<FixedOffset>>,
    ) -> Result<ServiceResult, BoxError>;

    /// Register a device to receive update pushes for a pass.
    ///
    /// Expected statuses: 201 registered, 200 already registered, 401
    /// rejected.
    async fn register_device(
        &self,
        device_library_identifier: &str,
        pass_type_identifier: &str,
        serial_number: &str,
        authentication_token: &str,
        push_token: &str,
    ) -> Result<StatusCode, BoxError>;

    /// Unregister a device. Expected statuses: 200 unregistered, 401
    /// rejected.
    async fn unregister_device(
        &self,
        device_library_identifier: &str,
        pass_type_identifier: &str,
        serial_number: &str,
        authentication_token: &str,
    ) -> Result<StatusCode, BoxError>;

    /// List serial numbers of passes registered to a device, optionally
    /// limited to passes changed since the given update tag.
    ///
    /// Expected results: 200 with `{"lastUpdated": ..., "serialNumbers":
    /// [...]}`, 204 when there is nothing to report.
    async fn registrations(
        &self,
        device_library_identifier: &str,
        pass_type_identifier: &str,
        passes_updated_since: Option<&str>,
    ) -> Result<ServiceResult, BoxError>;

    /// Record log messages a device reports after a failed update.
    async fn log(&self, messages: Vec<String>) -> Result<(), BoxError>;
}
