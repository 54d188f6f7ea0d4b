//! Local development server.
//!
//! Mounts the web-service router over an in-memory backend that serves a
//! single builder-produced event ticket. Poke it with:
//!
//! ```text
//! curl -H 'Authorization: ApplePass sometoken' \
//!     http://127.0.0.1:8080/v1/passes/pass.com.example.concert/8j23fm3
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};
use tower::BoxError;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use passkit_gateway::pass::{Barcode, BarcodeFormat, PassBuilder};
use passkit_gateway::{router, PassKitService, ServiceResult};

struct DemoService {
    pass: Value,
}

#[async_trait]
impl PassKitService for DemoService {
    async fn latest_pass(
        &self,
        pass_type_identifier: &str,
        serial_number: &str,
        _authentication_token: &str,
        if_modified_since: Option<DateTime<FixedOffset>>,
    ) -> Result<ServiceResult, BoxError> {
        if if_modified_since.is_some() {
            return Ok(ServiceResult::status(StatusCode::NOT_MODIFIED));
        }
        tracing::info!(pass_type_identifier, serial_number, "Serving demo pass");
        Ok(ServiceResult::ok(self.pass.clone()))
    }

    async fn register_device(
        &self,
        device_library_identifier: &str,
        _pass_type_identifier: &str,
        _serial_number: &str,
        _authentication_token: &str,
        push_token: &str,
    ) -> Result<StatusCode, BoxError> {
        tracing::info!(device_library_identifier, push_token, "Device registered");
        Ok(StatusCode::CREATED)
    }

    async fn unregister_device(
        &self,
        device_library_identifier: &str,
        _pass_type_identifier: &str,
        _serial_number: &str,
        _authentication_token: &str,
    ) -> Result<StatusCode, BoxError> {
        tracing::info!(device_library_identifier, "Device unregistered");
        Ok(StatusCode::OK)
    }

    async fn registrations(
        &self,
        _device_library_identifier: &str,
        _pass_type_identifier: &str,
        _passes_updated_since: Option<&str>,
    ) -> Result<ServiceResult, BoxError> {
        Ok(ServiceResult::ok(json!({
            "lastUpdated": "1",
            "serialNumbers": ["8j23fm3"],
        })))
    }

    async fn log(&self, messages: Vec<String>) -> Result<(), BoxError> {
        for message in &messages {
            tracing::info!(message = %message, "Device log");
        }
        Ok(())
    }
}

fn demo_pass() -> Value {
    PassBuilder::new()
        .standard()
            .description("Concert ticket")
            .organization_name("Example Corp")
            .pass_type_identifier("pass.com.example.concert")
            .serial_number("8j23fm3")
            .team_identifier("A1B2C3D4E5")
            .finish()
        .web_service()
            .authentication_token("sometoken")
            .web_service_url("http://127.0.0.1:8080/")
            .finish()
        .event_ticket()
            .primary_fields()
                .add("event").label("Event").value("The Beat Goes On")
                .add("loc").label("Location").value("Moscone West")
                .finish()
            .finish()
            .finish()
        .visual_appearance()
            .barcode(Barcode::new("8j23fm3", BarcodeFormat::Qr))
            .background_color("rgb(23, 187, 82)")
            .finish()
        .build()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = router(Arc::new(DemoService { pass: demo_pass() }))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .expect("bind 127.0.0.1:8080");
    tracing::info!(address = %listener.local_addr().expect("local addr"), "Dev server listening");
    axum::serve(listener, app).await.expect("serve");
}
