//! Shared mock backend for web-service integration tests.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset};
use tokio::sync::Mutex;
use tower::BoxError;

use passkit_gateway::{PassKitService, ServiceResult};

/// Recorded arguments of a `latest_pass` call.
#[derive(Debug, Clone)]
pub struct LatestPassCall {
    pub pass_type_identifier: String,
    pub serial_number: String,
    pub authentication_token: String,
    pub if_modified_since: Option<DateTime<FixedOffset>>,
}

/// Recorded arguments of a `register_device` call.
#[derive(Debug, Clone)]
pub struct RegisterCall {
    pub device_library_identifier: String,
    pub pass_type_identifier: String,
    pub serial_number: String,
    pub authentication_token: String,
    pub push_token: String,
}

/// Recorded arguments of an `unregister_device` call.
#[derive(Debug, Clone)]
pub struct UnregisterCall {
    pub device_library_identifier: String,
    pub pass_type_identifier: String,
    pub serial_number: String,
    pub authentication_token: String,
}

/// Recorded arguments of a `registrations` call.
#[derive(Debug, Clone)]
pub struct RegistrationsCall {
    pub device_library_identifier: String,
    pub pass_type_identifier: String,
    pub passes_updated_since: Option<String>,
}

/// Scriptable backend that records every interaction for verification.
pub struct MockPassKitService {
    latest_pass_result: Mutex<ServiceResult>,
    register_status: Mutex<StatusCode>,
    unregister_status: Mutex<StatusCode>,
    registrations_result: Mutex<ServiceResult>,

    /// Force every operation to fail.
    fail_all: AtomicBool,

    /// Total backend invocations, for never-invoked assertions.
    call_count: AtomicU64,

    latest_pass_calls: Mutex<Vec<LatestPassCall>>,
    register_calls: Mutex<Vec<RegisterCall>>,
    unregister_calls: Mutex<Vec<UnregisterCall>>,
    registrations_calls: Mutex<Vec<RegistrationsCall>>,
    logged: Mutex<Vec<Vec<String>>>,
}

#[allow(dead_code)]
impl MockPassKitService {
    pub fn new() -> Self {
        Self {
            latest_pass_result: Mutex::new(ServiceResult::status(StatusCode::NOT_FOUND)),
            register_status: Mutex::new(StatusCode::CREATED),
            unregister_status: Mutex::new(StatusCode::OK),
            registrations_result: Mutex::new(ServiceResult::status(StatusCode::NO_CONTENT)),
            fail_all: AtomicBool::new(false),
            call_count: AtomicU64::new(0),
            latest_pass_calls: Mutex::new(Vec::new()),
            register_calls: Mutex::new(Vec::new()),
            unregister_calls: Mutex::new(Vec::new()),
            registrations_calls: Mutex::new(Vec::new()),
            logged: Mutex::new(Vec::new()),
        }
    }

    pub async fn set_latest_pass(&self, result: ServiceResult) {
        *self.latest_pass_result.lock().await = result;
    }

    pub async fn set_register_status(&self, status: StatusCode) {
        *self.register_status.lock().await = status;
    }

    pub async fn set_unregister_status(&self, status: StatusCode) {
        *self.unregister_status.lock().await = status;
    }

    pub async fn set_registrations(&self, result: ServiceResult) {
        *self.registrations_result.lock().await = result;
    }

    pub fn fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn latest_pass_calls(&self) -> Vec<LatestPassCall> {
        self.latest_pass_calls.lock().await.clone()
    }

    pub async fn register_calls(&self) -> Vec<RegisterCall> {
        self.register_calls.lock().await.clone()
    }

    pub async fn unregister_calls(&self) -> Vec<UnregisterCall> {
        self.unregister_calls.lock().await.clone()
    }

    pub async fn registrations_calls(&self) -> Vec<RegistrationsCall> {
        self.registrations_calls.lock().await.clone()
    }

    pub async fn logged(&self) -> Vec<Vec<String>> {
        self.logged.lock().await.clone()
    }

    fn maybe_fail(&self) -> Result<(), BoxError> {
        if self.fail_all.load(Ordering::SeqCst) {
            Err("injected backend failure".into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PassKitService for MockPassKitService {
    async fn latest_pass(
        &self,
        pass_type_identifier: &str,
        serial_number: &str,
        authentication_token: &str,
        if_modified_since: Option<DateTime<FixedOffset>>,
    ) -> Result<ServiceResult, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.latest_pass_calls.lock().await.push(LatestPassCall {
            pass_type_identifier: pass_type_identifier.to_owned(),
            serial_number: serial_number.to_owned(),
            authentication_token: authentication_token.to_owned(),
            if_modified_since,
        });
        self.maybe_fail()?;
        Ok(self.latest_pass_result.lock().await.clone())
    }

    async fn register_device(
        &self,
        device_library_identifier: &str,
        pass_type_identifier: &str,
        serial_number: &str,
        authentication_token: &str,
        push_token: &str,
    ) -> Result<StatusCode, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.register_calls.lock().await.push(RegisterCall {
            device_library_identifier: device_library_identifier.to_owned(),
            pass_type_identifier: pass_type_identifier.to_owned(),
            serial_number: serial_number.to_owned(),
            authentication_token: authentication_token.to_owned(),
            push_token: push_token.to_owned(),
        });
        self.maybe_fail()?;
        Ok(*self.register_status.lock().await)
    }

    async fn unregister_device(
        &self,
        device_library_identifier: &str,
        pass_type_identifier: &str,
        serial_number: &str,
        authentication_token: &str,
    ) -> Result<StatusCode, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.unregister_calls.lock().await.push(UnregisterCall {
            device_library_identifier: device_library_identifier.to_owned(),
            pass_type_identifier: pass_type_identifier.to_owned(),
            serial_number: serial_number.to_owned(),
            authentication_token: authentication_token.to_owned(),
        });
        self.maybe_fail()?;
        Ok(*self.unregister_status.lock().await)
    }

    async fn registrations(
        &self,
        device_library_identifier: &str,
        pass_type_identifier: &str,
        passes_updated_since: Option<&str>,
    ) -> Result<ServiceResult, BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.registrations_calls.lock().await.push(RegistrationsCall {
            device_library_identifier: device_library_identifier.to_owned(),
            pass_type_identifier: pass_type_identifier.to_owned(),
            passes_updated_since: passes_updated_since.map(str::to_owned),
        });
        self.maybe_fail()?;
        Ok(self.registrations_result.lock().await.clone())
    }

    async fn log(&self, messages: Vec<String>) -> Result<(), BoxError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.logged.lock().await.push(messages);
        self.maybe_fail()?;
        Ok(())
    }
}
